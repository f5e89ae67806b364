use document::DocumentError;

use super::{trimmed, ArticleTrees};
use crate::paths;
use crate::types::{Image, ImageLabel};

const UUID_MARKER: &str = "uuid=";

/// Lead images in fixed square, standard, wide order, skipping crops whose
/// file reference carries no `uuid=` marker.
pub fn lead_images(trees: &ArticleTrees<'_, '_>) -> Result<Vec<Image>, DocumentError> {
    let mut images = Vec::with_capacity(ImageLabel::ALL.len());
    for label in ImageLabel::ALL {
        let fileref = trimmed(trees.value, &paths::lead_image_fileref(label.as_str()))?;
        if let Some(id) = image_id(&fileref) {
            images.push(Image {
                id: id.to_string(),
                label,
            });
        }
    }
    Ok(images)
}

/// Text after the last `uuid=` marker, if non-empty.
fn image_id(fileref: &str) -> Option<&str> {
    let start = fileref.rfind(UUID_MARKER)? + UUID_MARKER.len();
    Some(&fileref[start..]).filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::*;

    const SQUARE: &str = "f4e7b6aa-8d4e-11e7-a352-e46f43c5825d";
    const STANDARD: &str = "0a3e1b84-8d4e-11e7-a352-e46f43c5825d";
    const WIDE: &str = "1d6f9e5c-8d4e-11e7-a352-e46f43c5825d";

    fn crop(label: &str, id: &str) -> String {
        format!(
            r#"<lead-image-{label} fileref="/FT/Graphics/Online/Z_Undefined/2017/08/img.jpg?uuid={id}"/>"#
        )
    }

    fn run(crops: &[String]) -> Vec<Image> {
        let value = lead(&format!("<lead-image-set>{}</lead-image-set>", crops.concat()));
        let (a, v) = (parse(EMPTY_ATTRIBUTES), parse(&value));
        lead_images(&ArticleTrees::new(&a, &v)).unwrap()
    }

    #[test]
    fn all_three_crops_in_order() {
        let images = run(&[crop("wide", WIDE), crop("square", SQUARE), crop("standard", STANDARD)]);
        let got: Vec<(&str, ImageLabel)> = images.iter().map(|i| (i.id.as_str(), i.label)).collect();
        assert_eq!(
            got,
            vec![
                (SQUARE, ImageLabel::Square),
                (STANDARD, ImageLabel::Standard),
                (WIDE, ImageLabel::Wide),
            ]
        );
    }

    #[test]
    fn every_subset_keeps_fixed_order() {
        let all = [
            (ImageLabel::Square, SQUARE),
            (ImageLabel::Standard, STANDARD),
            (ImageLabel::Wide, WIDE),
        ];
        for mask in 0u8..8 {
            let present: Vec<_> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u8 << *i) != 0)
                .map(|(_, c)| *c)
                .collect();
            let crops: Vec<String> = present
                .iter()
                .rev()
                .map(|(label, id)| crop(label.as_str(), id))
                .collect();
            let labels: Vec<ImageLabel> = run(&crops).iter().map(|i| i.label).collect();
            let expected: Vec<ImageLabel> = present.iter().map(|(l, _)| *l).collect();
            assert_eq!(labels, expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn fileref_without_marker_is_skipped() {
        let images = run(&[
            r#"<lead-image-square fileref="/FT/Graphics/img.jpg"/>"#.to_string(),
            r#"<lead-image-wide fileref="/FT/img.jpg?uuid="/>"#.to_string(),
            crop("standard", STANDARD),
        ]);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].label, ImageLabel::Standard);
    }

    #[test]
    fn last_marker_wins() {
        assert_eq!(image_id("/a?uuid=old&x=1&uuid=new"), Some("new"));
        assert_eq!(image_id("/a/b.jpg"), None);
    }

    #[test]
    fn no_image_set_yields_empty_list() {
        assert!(run(&[]).is_empty());
    }
}
