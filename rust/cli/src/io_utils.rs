//! Input helpers shared by interactive commands.

use std::io::BufRead;

/// Read one trimmed line from `stdin`. Returns `None` on EOF or read error.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Split a comma- or whitespace-separated list of items.
///
/// ```
/// use lumo_cli::io_utils::split_items;
/// assert_eq!(split_items(&["a,b".into(), "c".into()]), vec!["a", "b", "c"]);
/// ```
pub fn split_items(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|s| s.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
