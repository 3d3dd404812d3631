//! Built-in reusable section components.

mod address;
pub use address::AddressComponent;

mod phone;
pub use phone::PhoneComponent;

/// Keep the digits of a raw input, dropping spaces, dashes, and the like.
pub(crate) fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
