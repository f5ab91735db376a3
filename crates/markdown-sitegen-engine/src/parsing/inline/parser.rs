use crate::parsing::ParseError;

use super::{
    kinds::{BracketSpan, Delimited},
    types::{TextToken, TokenKind},
};

/// Tokenizes one span of inline markdown.
///
/// Stages run in a fixed order and each one only looks inside `Plain`
/// tokens, so text already claimed by a style is never re-parsed:
///
/// 1. `**bold**`
/// 2. `_italic_`
/// 3. `` `code` ``
/// 4. `[text](url)`
/// 5. `![alt](url)`
///
/// Concatenating the text of the returned tokens reproduces the input minus
/// the markup itself.
///
/// # Errors
/// [`ParseError::UnclosedDelimiter`] when a delimiter occurs an odd number of
/// times inside a plain run. Malformed links and images are not errors; they
/// stay plain text.
pub fn tokenize(text: &str) -> Result<Vec<TextToken>, ParseError> {
    let mut tokens = vec![TextToken::plain(text)];
    for style in Delimited::ORDER {
        tokens = split_tokens_delimiter(tokens, style)?;
    }
    tokens = split_tokens_link(tokens);
    tokens = split_tokens_image(tokens);
    Ok(tokens)
}

/// Splits every plain token on `style.delimiter`, alternating plain and styled parts.
///
/// Empty parts are kept, so `"**a**"` yields `["", a, ""]`.
pub fn split_tokens_delimiter(
    tokens: Vec<TextToken>,
    style: Delimited,
) -> Result<Vec<TextToken>, ParseError> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let parts: Vec<&str> = token.text.split(style.delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnclosedDelimiter {
                delimiter: style.delimiter.to_string(),
                text: token.text,
            });
        }

        out.extend(parts.into_iter().enumerate().map(|(i, part)| {
            let kind = if i % 2 == 0 {
                TokenKind::Plain
            } else {
                style.kind
            };
            TextToken::new(part, kind)
        }));
    }
    Ok(out)
}

/// Extracts `[text](url)` spans from plain tokens.
pub fn split_tokens_link(tokens: Vec<TextToken>) -> Vec<TextToken> {
    split_tokens_bracket(tokens, BracketSpan::Link)
}

/// Extracts `![alt](url)` spans from plain tokens.
pub fn split_tokens_image(tokens: Vec<TextToken>) -> Vec<TextToken> {
    split_tokens_bracket(tokens, BracketSpan::Image)
}

fn split_tokens_bracket(tokens: Vec<TextToken>, span: BracketSpan) -> Vec<TextToken> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let matches = span.find_iter(&token.text);
        if matches.is_empty() {
            out.push(token);
            continue;
        }

        let mut last = 0;
        for m in matches {
            push_plain(&mut out, &token.text[last..m.start]);
            out.push(match span {
                BracketSpan::Link => TextToken::link(m.text, m.url),
                BracketSpan::Image => TextToken::image(m.text, m.url),
            });
            last = m.end;
        }
        push_plain(&mut out, &token.text[last..]);
    }
    out
}

fn push_plain(out: &mut Vec<TextToken>, text: &str) {
    if !text.is_empty() {
        out.push(TextToken::plain(text));
    }
}

/// `(text, url)` pairs for every link in `text`; images are skipped.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract(text, BracketSpan::Link)
}

/// `(alt, url)` pairs for every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract(text, BracketSpan::Image)
}

fn extract(text: &str, span: BracketSpan) -> Vec<(String, String)> {
    span.find_iter(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn split_bold() {
        let tokens = vec![TextToken::plain("This is a **bold text** node")];
        let split = split_tokens_delimiter(tokens, Delimited::BOLD).unwrap();
        assert_eq!(
            split,
            vec![
                TextToken::plain("This is a "),
                TextToken::new("bold text", TokenKind::Bold),
                TextToken::plain(" node"),
            ]
        );
    }

    #[test]
    fn split_two_bold_spans_keeps_empty_edges() {
        let tokens = vec![TextToken::plain("**bold text** and **more bold text**")];
        let split = split_tokens_delimiter(tokens, Delimited::BOLD).unwrap();
        assert_eq!(
            split,
            vec![
                TextToken::plain(""),
                TextToken::new("bold text", TokenKind::Bold),
                TextToken::plain(" and "),
                TextToken::new("more bold text", TokenKind::Bold),
                TextToken::plain(""),
            ]
        );
    }

    #[test]
    fn split_bold_then_italic() {
        let tokens = vec![TextToken::plain(
            "This is a **bold text** node with _italic text_",
        )];
        let split = split_tokens_delimiter(tokens, Delimited::BOLD).unwrap();
        let split = split_tokens_delimiter(split, Delimited::ITALIC).unwrap();
        assert_eq!(split[0], TextToken::plain("This is a "));
        assert_eq!(split[1], TextToken::new("bold text", TokenKind::Bold));
        assert_eq!(split[2], TextToken::plain(" node with "));
        assert_eq!(split[3], TextToken::new("italic text", TokenKind::Italic));
    }

    #[test]
    fn split_code() {
        let tokens = vec![TextToken::plain("This is a `code` block")];
        let split = split_tokens_delimiter(tokens, Delimited::CODE).unwrap();
        assert_eq!(split[1], TextToken::new("code", TokenKind::Code));
    }

    #[test]
    fn unclosed_delimiter_is_an_error() {
        let tokens = vec![TextToken::plain("This is a **bold text node")];
        let err = split_tokens_delimiter(tokens, Delimited::BOLD).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnclosedDelimiter {
                delimiter: "**".to_string(),
                text: "This is a **bold text node".to_string(),
            }
        );
    }

    #[test]
    fn styled_tokens_pass_through_untouched() {
        let tokens = vec![TextToken::new("a_b", TokenKind::Code)];
        let split = split_tokens_delimiter(tokens.clone(), Delimited::ITALIC).unwrap();
        assert_eq!(split, tokens);
    }

    #[test]
    fn extract_single_image() {
        assert_eq!(
            extract_markdown_images(
                "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"
            ),
            vec![pair("image", "https://i.imgur.com/zjjcJKZ.png")]
        );
    }

    #[test]
    fn extract_multiple_images() {
        assert_eq!(
            extract_markdown_images(
                "![image1](http://example.com/1.png) and ![image2](http://example.com/2.png)"
            ),
            vec![
                pair("image1", "http://example.com/1.png"),
                pair("image2", "http://example.com/2.png"),
            ]
        );
    }

    #[test]
    fn extract_images_ignores_malformed_syntax() {
        assert!(extract_markdown_images("![alt text(http://example.com/image.png)").is_empty());
        assert!(extract_markdown_images("This is a text without images.").is_empty());
    }

    #[test]
    fn extract_image_keeps_percent_encoding_and_empty_alt() {
        assert_eq!(
            extract_markdown_images("![alt text](http://example.com/image%20with%20spaces.png)"),
            vec![pair("alt text", "http://example.com/image%20with%20spaces.png")]
        );
        assert_eq!(
            extract_markdown_images("![](http://example.com/image.png)"),
            vec![pair("", "http://example.com/image.png")]
        );
    }

    #[test]
    fn extract_links_skips_images() {
        assert_eq!(
            extract_markdown_links(
                "![image](http://example.com/image.png) and [link](http://example.com)"
            ),
            vec![pair("link", "http://example.com")]
        );
    }

    #[test]
    fn extract_links_ignores_malformed_and_empty() {
        assert!(extract_markdown_links("[link(http://example.com)").is_empty());
        assert!(extract_markdown_links("").is_empty());
    }

    #[test]
    fn extract_link_with_empty_text() {
        assert_eq!(
            extract_markdown_links("[](http://example.com)"),
            vec![pair("", "http://example.com")]
        );
    }

    #[test]
    fn split_images() {
        let tokens = vec![TextToken::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_tokens_image(tokens),
            vec![
                TextToken::plain("This is text with an "),
                TextToken::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextToken::plain(" and another "),
                TextToken::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links() {
        let tokens = vec![TextToken::plain(
            "This is text with an [link 1](https://example.com/df345ds) and another [link two](https://example.com/sd43sd)",
        )];
        assert_eq!(
            split_tokens_link(tokens),
            vec![
                TextToken::plain("This is text with an "),
                TextToken::link("link 1", "https://example.com/df345ds"),
                TextToken::plain(" and another "),
                TextToken::link("link two", "https://example.com/sd43sd"),
            ]
        );
    }

    #[test]
    fn malformed_link_stays_plain() {
        for text in [
            "This is [malformed link(http://example.com)",
            "This is [link(http://example.com",
        ] {
            assert_eq!(
                split_tokens_link(vec![TextToken::plain(text)]),
                vec![TextToken::plain(text)]
            );
        }
    }

    #[test]
    fn malformed_image_stays_plain() {
        for text in [
            "This is ![alt text(http://example.com/image.png)",
            "This is ![alt text(http://example.com/image.png",
        ] {
            assert_eq!(
                split_tokens_image(vec![TextToken::plain(text)]),
                vec![TextToken::plain(text)]
            );
        }
    }

    #[test]
    fn tokenize_all_kinds() {
        let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            tokenize(text).unwrap(),
            vec![
                TextToken::plain("This is "),
                TextToken::new("text", TokenKind::Bold),
                TextToken::plain(" with an "),
                TextToken::new("italic", TokenKind::Italic),
                TextToken::plain(" word and a "),
                TextToken::new("code block", TokenKind::Code),
                TextToken::plain(" and an "),
                TextToken::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextToken::plain(" and a "),
                TextToken::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn bold_content_is_not_reparsed() {
        let tokens = tokenize("**[not](a link)**").unwrap();
        assert_eq!(tokens[1], TextToken::new("[not](a link)", TokenKind::Bold));
    }

    #[test]
    fn tokenize_unclosed_code_fails() {
        assert!(matches!(
            tokenize("a `b c"),
            Err(ParseError::UnclosedDelimiter { ref delimiter, .. }) if delimiter == "`"
        ));
    }
}
