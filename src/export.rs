//! Plain-text manuscript of a book, offered as a download.

use wasm_bindgen::JsCast;

use crate::book::{page_lengths, Book};

const PAGE_SEPARATOR: &str = "\n\n";

fn page_label(number: usize) -> String {
    format!("Page {}:\n", number)
}

/// Every page prefixed with its 1-based label, separated by a blank line.
pub fn render_manuscript(book: &Book) -> String {
    book.pages()
        .iter()
        .enumerate()
        .map(|(i, text)| format!("{}{}", page_label(i + 1), text))
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}

/// Recover the story from a manuscript of `page_count` pages.
///
/// Labels are stripped by position rather than by searching, since page text
/// may itself contain something that looks like a label. Returns `None` when
/// the text is not a manuscript of that many pages.
pub fn parse_manuscript(manuscript: &str, page_count: usize) -> Option<String> {
    if page_count == 0 {
        return manuscript.is_empty().then(String::new);
    }

    let overhead: usize = (1..=page_count).map(|n| page_label(n).len()).sum::<usize>()
        + PAGE_SEPARATOR.len() * (page_count - 1);
    let story_len = manuscript.chars().count().checked_sub(overhead)?;
    let mut rest = manuscript;
    let mut story = String::with_capacity(manuscript.len());
    for (i, take) in page_lengths(story_len, page_count).into_iter().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix(PAGE_SEPARATOR)?;
        }
        rest = rest.strip_prefix(page_label(i + 1).as_str())?;
        let split = rest
            .char_indices()
            .nth(take)
            .map(|(byte, _)| byte)
            .unwrap_or(rest.len());
        story.push_str(&rest[..split]);
        rest = &rest[split..];
    }

    rest.is_empty().then_some(story)
}

/// `title.txt` with every run of whitespace replaced by `_`.
pub fn download_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name.push_str(".txt");
    name
}

/// Hand `contents` to the browser as a `text/plain` download.
pub fn download_text_file(file_name: &str, contents: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window available")?;
    let document = window.document().ok_or("no document available")?;
    let body = document.body().ok_or("document has no body")?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create file: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create file URL: {:?}", e))?;

    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))?
        .dyn_into()
        .map_err(|_| "created element is not a link")?;
    link.set_href(&url);
    link.set_download(file_name);

    let _ = body.append_child(&link);
    link.click();
    let _ = body.remove_child(&link);
    let _ = web_sys::Url::revoke_object_url(&url);

    log::info!("Offered {} for download", file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StoryText;

    fn book_of(text: &str) -> Book {
        Book::from_story(&StoryText::new(text), "Your Digital Journey", "Someone")
    }

    #[test]
    fn test_manuscript_layout() {
        let manuscript = render_manuscript(&book_of("abcdefgh"));
        assert_eq!(
            manuscript,
            "Page 1:\nab\n\nPage 2:\ncd\n\nPage 3:\nef\n\nPage 4:\ngh"
        );
    }

    #[test]
    fn test_manuscript_round_trip() {
        let stories = [
            String::new(),
            "a".to_string(),
            "abcde".to_string(),
            "x".repeat(100),
            "Searches at 2am:\n\nPage 2:\nhow to sleep".to_string(),
            "നിന്റെ കഥ\n\nPage 3:\n".to_string(),
        ];
        for story in stories {
            let book = book_of(&story);
            let manuscript = render_manuscript(&book);
            assert_eq!(
                parse_manuscript(&manuscript, book.page_count()).as_deref(),
                Some(story.as_str()),
                "story {:?}",
                story
            );
        }
    }

    #[test]
    fn test_parse_rejects_foreign_text() {
        assert_eq!(parse_manuscript("just some notes", 4), None);
        assert_eq!(parse_manuscript("", 4), None);
        assert_eq!(parse_manuscript("", 0), Some(String::new()));
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("Your Digital Journey"), "Your_Digital_Journey.txt");
        assert_eq!(download_file_name("  spaced \t out  "), "_spaced_out_.txt");
        assert_eq!(download_file_name("Ninte കഥ"), "Ninte_കഥ.txt");
    }
}
