//! Key-case transforms between this crate's snake_case mappings and the
//! gateway's camelCase wire keys.
//!
//! The legacy `/scripts` endpoints additionally prefix a fixed set of
//! "contact" fields with `ord` on the wire (`name` -> `ordName`). The
//! prefix is only ever applied to keys in [`CONTACT_PARAMS`], never
//! inferred.

/// Contact fields that receive the vendor's `ord` prefix.
pub const CONTACT_PARAMS: [&str; 9] = [
    "name",
    "email_address",
    "phone_number",
    "address_1",
    "address_2",
    "city",
    "postal_code",
    "province",
    "country",
];

/// Plain snake_case to camelCase, no prefixing. XML tag names use this
/// directly; the `ord` convention only exists on the form-body wire.
///
/// `bank_account_type` -> `bankAccountType`.
pub fn to_camel_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (index, word) in key.split('_').enumerate() {
        if index == 0 {
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Outbound form-body transform: snake_case to the vendor's camelCase,
/// with the `ord` prefix applied to whitelisted contact fields.
///
/// `bank_account_type` -> `bankAccountType`, `name` -> `ordName`.
pub fn to_vendor_key(key: &str) -> String {
    if CONTACT_PARAMS.contains(&key) {
        to_camel_key(&format!("ord_{key}"))
    } else {
        to_camel_key(key)
    }
}

/// Inbound transform: vendor camelCase to snake_case, stripping a literal
/// leading `ord_`.
///
/// An underscore is inserted before every character that equals its own
/// uppercase form — uppercase letters and digits alike — so
/// `someGelflings1` becomes `some_gelflings_1` and `ordAddress1` becomes
/// `address_1`.
pub fn to_snake_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() || ch.is_ascii_digit() {
            out.push('_');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    match out.strip_prefix("ord_") {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}
