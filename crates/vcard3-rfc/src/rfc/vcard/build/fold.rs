//! Folding of inline binary bodies.

/// Appends `body` to `output`, folding so no physical line exceeds `width`
/// octets.
///
/// `line_len` is the number of octets already written on the current line.
/// Each fold is `terminator` followed by a single space, which counts toward
/// the next line. A `width` of 0 disables folding.
pub fn push_folded(output: &mut String, body: &str, line_len: usize, width: usize, terminator: &str) {
    if width == 0 || line_len + body.len() <= width {
        output.push_str(body);
        return;
    }

    let mut current_len = line_len;

    for c in body.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > width {
            output.push_str(terminator);
            output.push(' ');
            current_len = 1; // The space
        }

        output.push(c);
        current_len += char_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(body: &str, line_len: usize, width: usize) -> String {
        let mut output = String::new();
        push_folded(&mut output, body, line_len, width, "\r\n");
        output
    }

    #[test]
    fn short_body_unchanged() {
        assert_eq!(fold("aGVsbG8=", 20, 75), "aGVsbG8=");
    }

    #[test]
    fn fold_at_width() {
        let body = "A".repeat(200);
        let folded = fold(&body, 20, 75);

        let lines: Vec<&str> = folded.split("\r\n").collect();
        assert_eq!(lines[0].len(), 55);
        assert!(lines[1..].iter().all(|line| line.starts_with(' ') && line.len() <= 75));
        assert_eq!(folded.replace("\r\n ", ""), body);
    }

    #[test]
    fn fold_with_lf_terminator() {
        let mut output = String::new();
        push_folded(&mut output, &"B".repeat(40), 0, 16, "\n");
        assert!(output.contains("\n B"));
        assert!(!output.contains('\r'));
        assert_eq!(output.replace("\n ", ""), "B".repeat(40));
    }

    #[test]
    fn zero_width_disables_folding() {
        let body = "C".repeat(500);
        assert_eq!(fold(&body, 30, 0), body);
    }
}
