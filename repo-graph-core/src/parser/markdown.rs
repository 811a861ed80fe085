//! Markdown block tree built from pulldown-cmark events

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// A top-level markdown block, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    List { ordered: bool, items: Vec<String> },
    Code(CodeBlock),
}

/// A fenced or indented code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// First word of the fence info string
    pub language: Option<String>,
    pub fenced: bool,
    pub content: String,
}

/// Parsed README: top-level blocks plus every code block at any depth
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocument {
    blocks: Vec<Block>,
    code_blocks: Vec<CodeBlock>,
}

/// Top-level block under construction
enum Pending {
    Heading { level: u8, text: String },
    Paragraph(String),
    List { ordered: bool, items: Vec<String>, item: Option<String> },
    Code,
    Skip,
}

impl Pending {
    fn push_text(&mut self, text: &str) {
        match self {
            Pending::Heading { text: buf, .. } | Pending::Paragraph(buf) => buf.push_str(text),
            Pending::List { item: Some(buf), .. } => buf.push_str(text),
            _ => {}
        }
    }

    fn finish(self) -> Option<Block> {
        match self {
            Pending::Heading { level, text } => {
                Some(Block::Heading { level, text: normalize_whitespace(&text) })
            }
            Pending::Paragraph(text) => {
                let text = normalize_whitespace(&text);
                (!text.is_empty()).then_some(Block::Paragraph(text))
            }
            Pending::List { ordered, items, .. } => Some(Block::List { ordered, items }),
            Pending::Code | Pending::Skip => None,
        }
    }
}

impl MarkdownDocument {
    /// Parse markdown text. CommonMark parsing never fails; odd input just yields fewer blocks.
    pub fn parse(content: &str) -> Self {
        let mut doc = Self::default();
        let mut depth = 0usize;
        let mut pending: Option<Pending> = None;
        let mut code: Option<CodeBlock> = None;

        for event in Parser::new(content) {
            match event {
                Event::Start(tag) => {
                    let top_level = depth == 0;
                    depth += 1;

                    match tag {
                        Tag::CodeBlock(kind) => {
                            let (language, fenced) = match kind {
                                CodeBlockKind::Fenced(info) => (info_language(&info), true),
                                CodeBlockKind::Indented => (None, false),
                            };
                            code = Some(CodeBlock { language, fenced, content: String::new() });
                            if top_level {
                                pending = Some(Pending::Code);
                            }
                        }
                        Tag::Heading { level, .. } if top_level => {
                            pending = Some(Pending::Heading { level: level as u8, text: String::new() });
                        }
                        Tag::Paragraph if top_level => {
                            pending = Some(Pending::Paragraph(String::new()));
                        }
                        Tag::List(start) if top_level => {
                            pending = Some(Pending::List {
                                ordered: start.is_some(),
                                items: Vec::new(),
                                item: None,
                            });
                        }
                        Tag::Item if depth == 2 => {
                            if let Some(Pending::List { item, .. }) = pending.as_mut() {
                                *item = Some(String::new());
                            }
                        }
                        _ if top_level => pending = Some(Pending::Skip),
                        Tag::Paragraph | Tag::List(_) | Tag::Item => {
                            if let Some(p) = pending.as_mut() {
                                p.push_text(" ");
                            }
                        }
                        _ => {}
                    }
                }
                Event::End(tag_end) => {
                    depth = depth.saturating_sub(1);

                    match tag_end {
                        TagEnd::CodeBlock => {
                            if let Some(block) = code.take() {
                                if depth == 0 {
                                    doc.blocks.push(Block::Code(block.clone()));
                                    pending = None;
                                }
                                doc.code_blocks.push(block);
                            }
                        }
                        TagEnd::Item if depth == 1 => {
                            if let Some(Pending::List { items, item, .. }) = pending.as_mut() {
                                if let Some(text) = item.take() {
                                    let text = normalize_whitespace(&text);
                                    if !text.is_empty() {
                                        items.push(text);
                                    }
                                }
                            }
                        }
                        _ if depth == 0 => {
                            if let Some(block) = pending.take().and_then(Pending::finish) {
                                doc.blocks.push(block);
                            }
                        }
                        TagEnd::Paragraph | TagEnd::Item => {
                            if let Some(p) = pending.as_mut() {
                                p.push_text(" ");
                            }
                        }
                        _ => {}
                    }
                }
                Event::Text(text) | Event::Code(text) => match code.as_mut() {
                    Some(block) => block.content.push_str(&text),
                    None => {
                        if let Some(p) = pending.as_mut() {
                            p.push_text(&text);
                        }
                    }
                },
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(p) = pending.as_mut() {
                        p.push_text(" ");
                    }
                }
                _ => {}
            }
        }

        doc
    }

    /// Top-level blocks in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Every code block, nested or not, in document order
    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    /// Fenced code blocks only
    pub fn fenced_code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.code_blocks.iter().filter(|block| block.fenced)
    }

    /// Top-level headings as `(block index, level, text)`
    pub fn headings(&self) -> impl Iterator<Item = (usize, u8, &str)> {
        self.blocks.iter().enumerate().filter_map(|(idx, block)| match block {
            Block::Heading { level, text } => Some((idx, *level, text.as_str())),
            _ => None,
        })
    }

    /// Blocks after the heading at `heading_idx`, up to the next heading of equal or higher level
    pub fn section_body(&self, heading_idx: usize) -> &[Block] {
        let level = match self.blocks.get(heading_idx) {
            Some(Block::Heading { level, .. }) => *level,
            _ => return &[],
        };

        let start = heading_idx + 1;
        let end = self.blocks[start..]
            .iter()
            .position(|block| matches!(block, Block::Heading { level: l, .. } if *l <= level))
            .map_or(self.blocks.len(), |offset| start + offset);

        &self.blocks[start..end]
    }

    /// First paragraph following the first H1 title
    pub fn title_paragraph(&self) -> Option<&str> {
        let (title_idx, _, _) = self.headings().find(|(_, level, _)| *level == 1)?;

        self.blocks[title_idx + 1..].iter().find_map(|block| match block {
            Block::Paragraph(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

fn info_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(|lang| lang.trim_matches(|c| c == '{' || c == '}').to_string())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
