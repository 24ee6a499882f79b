/// Converts free text into the capitalisation countries are stored under:
/// every whitespace-delimited word gets an upper-case first letter and the
/// rest of the word is lower-cased ("uNITED states" -> "United States").
pub fn capitalize_fully(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
