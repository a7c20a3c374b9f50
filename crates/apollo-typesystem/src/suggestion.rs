//! "Did you mean" suggestions for misspelled names in coercion errors

use levenshtein::levenshtein;

const MAX_SUGGESTIONS: usize = 5;

/// Returns the options that are lexically close to `input`, closest first.
pub(crate) fn suggestion_list<'a>(
    input: &str,
    options: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    let threshold = 1 + (input.len() as f64 * 0.4).floor() as usize;
    let input_lowercase = input.to_lowercase();
    let mut result = Vec::new();
    for option in options {
        // An option that only differs in upper/lower-case is always shown.
        let distance = if input_lowercase == option.to_lowercase() {
            1
        } else {
            levenshtein(input, option)
        };
        if distance <= threshold {
            result.push((option, distance));
        }
    }
    result.sort_by(|x, y| x.1.cmp(&y.1));
    result.into_iter().map(|(option, _)| option).collect()
}

/// Given `[A, B]`, returns ` Did you mean <kind> "A" or "B"?`.
/// Given `[A, B, C]`, returns ` Did you mean <kind> "A", "B", or "C"?`.
/// Returns an empty string when there is nothing to suggest,
/// so the result can be appended to an error message as-is.
pub(crate) fn did_you_mean(kind: Option<&str>, suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let mut message = String::from(" Did you mean ");
    if let Some(kind) = kind {
        message.push_str(kind);
        message.push(' ');
    }
    let suggestions = &suggestions[..suggestions.len().min(MAX_SUGGESTIONS)];
    match suggestions {
        [only] => message.push_str(&format!("\"{only}\"")),
        [first, second] => message.push_str(&format!("\"{first}\" or \"{second}\"")),
        [head @ .., last] => {
            for suggestion in head {
                message.push_str(&format!("\"{suggestion}\", "));
            }
            message.push_str(&format!("or \"{last}\""));
        }
        [] => unreachable!(),
    }
    message.push('?');
    message
}
