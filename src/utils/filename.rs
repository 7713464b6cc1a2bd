use unicode_normalization::UnicodeNormalization;

// Names Windows refuses regardless of extension
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reduces an uploaded file name to a flat ASCII name that is safe to join onto
/// the upload directory. Accented letters lose their accents (NFKD), other
/// non-ASCII characters are dropped. The result can be empty.
///
/// `"../../etc/passwd"` becomes `"etc_passwd"`, `"My cool photo.jpg"` becomes
/// `"My_cool_photo.jpg"`.
pub fn secure_filename(input: &str) -> String {
    let flattened: String = input
        .nfkd()
        .filter(char::is_ascii)
        .map(|ch| if ch == '/' || ch == '\\' { ' ' } else { ch })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-'))
        .collect();

    let name = kept.trim_matches(|ch| ch == '.' || ch == '_');

    let stem = name.split('.').next().unwrap_or_default();
    if WINDOWS_DEVICE_NAMES.contains(&stem.to_ascii_uppercase().as_str()) {
        return format!("_{name}");
    }

    name.to_string()
}
