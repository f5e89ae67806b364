//! Derived image-set identities.
//!
//! Every master image gets an auto-generated image-set resource whose
//! identity is computed from the image identity and a fixed salt:
//!
//! ```text
//! image_set = image XOR UUIDv5(NAMESPACE_OID, "imageset")
//! ```
//!
//! XOR with a constant is a bijection, so distinct images never share an
//! image set, and applying the derivation twice returns the original image.
//!
//! The salt is a name-based v5 UUID. Publishers that salt with a name-based
//! MD5 (v3) UUID of the same name derive different image-set identities for
//! the same image, so ids minted here are only stable within this mapper.
use once_cell::sync::Lazy;
use uuid::Uuid;

const IMAGE_SET_SALT_NAME: &[u8] = b"imageset";

static IMAGE_SET_SALT: Lazy<Uuid> =
    Lazy::new(|| Uuid::new_v5(&Uuid::NAMESPACE_OID, IMAGE_SET_SALT_NAME));

/// Image-set identity derived from an image identity.
///
/// ```rust
/// use mapper::derive_image_set_uuid;
/// use uuid::Uuid;
///
/// let image = Uuid::parse_str("0a3e1b84-8d4e-11e7-a352-e46f43c5825d").unwrap();
/// let set = derive_image_set_uuid(image);
///
/// assert_ne!(set, image);
/// assert_eq!(derive_image_set_uuid(image), set);
/// assert_eq!(derive_image_set_uuid(set), image);
/// ```
pub fn derive_image_set_uuid(image: Uuid) -> Uuid {
    let salt = IMAGE_SET_SALT.as_bytes();
    let mut bytes = *image.as_bytes();
    for (b, s) in bytes.iter_mut().zip(salt.iter()) {
        *b ^= s;
    }
    Uuid::from_bytes(bytes)
}
