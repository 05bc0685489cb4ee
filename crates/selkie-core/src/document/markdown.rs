//! Markdown ingestion via pulldown-cmark.
//!
//! The event stream is folded into the block model with a small frame
//! stack. Container markup the model does not keep (blockquotes, emphasis,
//! links, raw HTML) is transparent: inner text and images flow through to
//! whatever frame is open. Code blocks suppress text so fence contents do
//! not surface as paragraphs.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use super::{Block, Document, Heading, Inline, List, ListItem};

struct ImageFrame {
    src: String,
    alt: String,
}

#[derive(Default)]
struct DocumentBuilder {
    blocks: Vec<Block>,
    lists: Vec<List>,
    items: Vec<ListItem>,
    heading: Option<Heading>,
    paragraph: Option<Vec<Inline>>,
    images: Vec<ImageFrame>,
    code_depth: usize,
}

/// Parses CommonMark text into the viewer's document model.
pub fn parse_markdown(text: &str) -> Document {
    let mut builder = DocumentBuilder::default();
    for event in Parser::new(text) {
        builder.event(event);
    }
    builder.finish()
}

impl DocumentBuilder {
    fn event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push_text(&code),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                // Headings nested inside list items stay item text.
                if self.lists.is_empty() && self.items.is_empty() {
                    self.heading = Some(Heading {
                        level: heading_level(level),
                        inlines: Vec::new(),
                    });
                }
            }
            Tag::List(start) => self.lists.push(List {
                ordered: start.is_some(),
                items: Vec::new(),
            }),
            Tag::Item => self.items.push(ListItem {
                inlines: Vec::new(),
                sublists: Vec::new(),
            }),
            Tag::Image { dest_url, .. } => self.images.push(ImageFrame {
                src: dest_url.into_string(),
                alt: String::new(),
            }),
            Tag::Paragraph => {
                if self.lists.is_empty() && self.items.is_empty() && self.heading.is_none() {
                    self.paragraph = Some(Vec::new());
                }
            }
            Tag::CodeBlock(_) => self.code_depth += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                if let Some(heading) = self.heading.take() {
                    self.blocks.push(Block::Heading(heading));
                }
            }
            TagEnd::List(_) => {
                if let Some(list) = self.lists.pop() {
                    if let Some(item) = self.items.last_mut() {
                        item.sublists.push(list);
                    } else {
                        self.blocks.push(Block::List(list));
                    }
                }
            }
            TagEnd::Item => {
                if let Some(item) = self.items.pop() {
                    if let Some(list) = self.lists.last_mut() {
                        list.items.push(item);
                    }
                }
            }
            TagEnd::Image => {
                if let Some(frame) = self.images.pop() {
                    if let Some(outer) = self.images.last_mut() {
                        // An image inside alt text contributes only its alt.
                        outer.alt.push_str(&frame.alt);
                    } else {
                        self.push_inline(Inline::Image {
                            src: frame.src,
                            alt: frame.alt,
                        });
                    }
                }
            }
            TagEnd::Paragraph => {
                if let Some(inlines) = self.paragraph.take() {
                    self.blocks.push(Block::Paragraph(inlines));
                }
            }
            TagEnd::CodeBlock => self.code_depth = self.code_depth.saturating_sub(1),
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.code_depth > 0 {
            return;
        }
        if let Some(frame) = self.images.last_mut() {
            frame.alt.push_str(text);
        } else if let Some(heading) = self.heading.as_mut() {
            push_inline_text(&mut heading.inlines, text);
        } else if let Some(item) = self.items.last_mut() {
            push_inline_text(&mut item.inlines, text);
        } else if let Some(paragraph) = self.paragraph.as_mut() {
            push_inline_text(paragraph, text);
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        if let Some(heading) = self.heading.as_mut() {
            heading.inlines.push(inline);
        } else if let Some(item) = self.items.last_mut() {
            item.inlines.push(inline);
        } else if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push(inline);
        }
    }

    fn finish(self) -> Document {
        // pulldown-cmark balances every Start with an End.
        debug_assert!(self.lists.is_empty());
        debug_assert!(self.items.is_empty());
        debug_assert!(self.images.is_empty());
        debug_assert!(self.heading.is_none());
        debug_assert!(self.paragraph.is_none());
        Document { blocks: self.blocks }
    }
}

fn push_inline_text(inlines: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_owned()));
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
