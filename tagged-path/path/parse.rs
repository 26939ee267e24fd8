use crate::platform;

/// Rewrite `input` into the canonical string for a path with the given base
/// and kind, or reject it.
///
/// This is the only place raw strings are inspected; everything downstream
/// relies on the canonical-form guarantees established here.
pub(super) fn normalize(input: &str, absolute: bool, dir: bool) -> Option<String> {
    if input.is_empty() {
        // The empty string is the relative current directory; every other
        // entry point rejects it.
        return (dir && !absolute).then(String::new);
    }

    if platform::starts_with_separator(input) != absolute {
        return None;
    }

    let mut segments = Vec::new();
    for segment in input.split(platform::is_separator) {
        match segment {
            // Separator runs and current-directory references collapse away.
            "" | "." => {}
            // Parent traversal is rejected outright, never resolved.
            ".." => return None,
            _ => {
                if !platform::is_valid_segment(segment) {
                    return None;
                }
                segments.push(segment);
            }
        }
    }

    if segments.is_empty() {
        // Only the absolute root survives normalizing to zero segments:
        // `.` and `./` are not names for the empty path, and a file must
        // keep at least one segment.
        if !(dir && absolute) {
            return None;
        }
        return Some(String::from(platform::SEPARATOR));
    }

    let mut canonical = String::with_capacity(input.len() + 1);
    if absolute {
        canonical.push(platform::SEPARATOR);
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            canonical.push(platform::SEPARATOR);
        }
        canonical.push_str(segment);
    }
    if dir {
        canonical.push(platform::SEPARATOR);
    }
    Some(canonical)
}
