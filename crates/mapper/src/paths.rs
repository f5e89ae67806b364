//! Locations of the fields the mapper reads.
//!
//! The article value schema lives under `/doc`, the attributes schema under
//! `/ObjectMetadata`. Both are owned by the CMS and assumed stable.

// Attributes tree.
pub const SOURCE_CODE: &str = "/ObjectMetadata/EditorialNotes/Sources/Source/SourceCode";
pub const ORIGINAL_UUID: &str = "/ObjectMetadata/EditorialNotes/OriginalUUID";
pub const OVERRIDE_ORIGINAL: &str = "/ObjectMetadata/EditorialNotes/OverrideOriginal";
pub const IS_CONTENT_PACKAGE: &str = "/ObjectMetadata/OutputChannels/DIFTcom/isContentPackage";
pub const ARTICLE_IMAGE: &str = "/ObjectMetadata/OutputChannels/DIFTcom/DIFTcomArticleImage";
pub const MARK_DELETED: &str = "/ObjectMetadata/OutputChannels/DIFTcom/DIFTcomMarkDeleted";
pub const DESIGN_THEME: &str = "/ObjectMetadata/OutputChannels/DIFTcom/DesignTheme";
pub const DESIGN_LAYOUT: &str = "/ObjectMetadata/OutputChannels/DIFTcom/DesignLayout";
pub const PUSH_NOTIFICATIONS_COHORT: &str =
    "/ObjectMetadata/OutputChannels/DIFTcom/pushNotificationsCohort";
pub const CATEGORY: &str = "/ObjectMetadata/WiresIndexing/category";
pub const SERVICE_ID: &str = "/ObjectMetadata/WiresIndexing/serviceid";
pub const REF_FIELD: &str = "/ObjectMetadata/WiresIndexing/ref_field";

// Value tree.
pub const LEGACY_DESIGN_THEME: &str = "/doc/lead/lead-components/content-package/@design-theme";
pub const TOC_SEQUENCE: &str = "/doc/lead/lead-components/content-package/@sequence";
pub const TOC_LABEL: &str = "/doc/lead/lead-components/content-package/@label";
pub const CONTENT_PACKAGE_NEXT: &str =
    "/doc/lead/lead-components/content-package/content-package-next";
pub const TOPPER_LAYOUT: &str = "/doc/lead/lead-components/topper/@layout";
pub const TOPPER_BACKGROUND: &str = "/doc/lead/lead-components/topper/@background-colour";
pub const TOPPER_HEADLINE: &str = "/doc/lead/lead-components/topper/topper-headline";
pub const TOPPER_STANDFIRST: &str = "/doc/lead/lead-components/topper/topper-standfirst";
pub const LEAD_IMAGE_SET: &str = "/doc/lead/lead-image-set";
pub const MAIN_IMAGE_FILEREF: &str = "/doc/lead/lead-images/web-master/@fileref";
pub const SUMMARY: &str = "/doc/story/summary";
pub const SUMMARY_DISPLAY_POSITION: &str = "/doc/story/summary/@display-position";
pub const PUSH_NOTIFICATION_TEXT: &str = "/doc/lead/push-notification-text";
pub const BODY: &str = "/doc/story/text/body";
pub const BLOCKS: &str = "/doc/blocks";

/// Path of the `fileref` attribute of one lead-image crop.
pub fn lead_image_fileref(label: &str) -> String {
    format!("{LEAD_IMAGE_SET}/lead-image-{label}/@fileref")
}

/// Path of the numbered block slot `n` (1-based).
pub fn block_slot(n: usize) -> String {
    format!("{BLOCKS}/block-{n}")
}
