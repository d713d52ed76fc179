//! Translation of classic `/X` switches into long options

use fcmp_common::FcError;

/// Rewrites legacy switches such as `/C`, `/LB50` or `/3` into the
/// equivalent long options. Everything else passes through unchanged.
///
/// Matching is case-insensitive and exact. On Windows any other argument
/// starting with `/` is rejected; elsewhere it is taken to be a path.
pub fn translate_legacy_args<I>(args: I) -> Result<Vec<String>, FcError>
where
    I: IntoIterator<Item = String>,
{
    let mut translated = Vec::new();
    let mut args = args.into_iter();
    if let Some(program) = args.next() {
        translated.push(program);
    }

    for arg in args {
        let Some(body) = arg.strip_prefix('/') else {
            translated.push(arg);
            continue;
        };
        match translate_switch(body) {
            Some(options) => translated.extend(options),
            None if cfg!(windows) => return Err(FcError::InvalidSwitch(arg)),
            None => translated.push(arg),
        }
    }
    Ok(translated)
}

fn translate_switch(body: &str) -> Option<Vec<String>> {
    let upper = body.to_ascii_uppercase();
    let flag = |name: &str| Some(vec![name.to_string()]);
    match upper.as_str() {
        "A" => flag("--abbreviated"),
        "B" => flag("--binary"),
        "C" => flag("--ignore-case"),
        "L" => flag("--text"),
        "N" => flag("--line-numbers"),
        "OFF" | "OFFLINE" => flag("--offline"),
        "T" => flag("--keep-tabs"),
        "U" => flag("--unicode"),
        "W" => flag("--compress-whitespace"),
        "?" => flag("--help"),
        _ => {
            if let Some(count) = upper.strip_prefix("LB").filter(|n| is_number(n)) {
                Some(vec!["--max-resync-lines".to_string(), count.to_string()])
            } else if is_number(&upper) {
                Some(vec!["--resync-lines".to_string(), upper])
            } else {
                None
            }
        }
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
