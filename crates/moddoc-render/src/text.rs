//! Clean-up helpers for documentation text embedded in rendered pages.
//!
//! Extracted doc text usually keeps the indentation of the comment it came from and may
//! contain runs of blank lines. These helpers normalise it before it reaches a template.

use serde::Serialize;

/// A block of documentation text, either prose or a fenced code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
	/// Whether the block came from a fenced code sample.
	pub code: bool,
	/// Prose joined into a single line, or code lines as written.
	pub text: String,
}

/// Remove the indentation shared by every non-blank line, plus leading and trailing
/// blank lines.
pub fn dedent(text: &str) -> String {
	let indent = text
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(indent_width)
		.min()
		.unwrap_or(0);
	let lines: Vec<&str> = text
		.lines()
		.map(|line| line.get(indent..).unwrap_or_default().trim_end())
		.collect();
	lines.join("\n").trim_matches('\n').to_string()
}

/// Leading spaces and tabs of `line`, in bytes.
fn indent_width(line: &str) -> usize {
	line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Collapse runs of blank lines to one, drop blank lines at either end and just before a
/// closing fence.
pub fn normalize_spacing(input: &str) -> String {
	let mut kept: Vec<&str> = Vec::new();
	let mut in_fence = false;
	let mut gap = false;

	for line in input.lines() {
		let trimmed = line.trim();
		if trimmed.is_empty() {
			gap = !kept.is_empty();
			continue;
		}
		let fence = trimmed.starts_with("```");
		if gap && !(fence && in_fence) {
			kept.push("");
		}
		gap = false;
		in_fence ^= fence;
		kept.push(line);
	}

	kept.join("\n")
}

/// Doc text ready to be embedded in a Markdown page.
pub fn markdown_doc(text: &str) -> String {
	let mut markdown = normalize_spacing(&dedent(text));
	if fence_count(&markdown) % 2 == 1 {
		markdown.push_str("\n```");
	}
	markdown.trim().to_string()
}

fn fence_count(text: &str) -> usize {
	text.lines()
		.filter(|line| line.trim_start().starts_with("```"))
		.count()
}

/// Split doc text into prose paragraphs and fenced code blocks.
pub fn paragraphs(text: &str) -> Vec<Paragraph> {
	let mut blocks = Vec::new();
	let mut prose = String::new();
	let mut code: Option<Vec<String>> = None;

	for line in dedent(text).lines() {
		let trimmed = line.trim();
		if trimmed.starts_with("```") {
			match code.take() {
				Some(lines) => blocks.push(Paragraph {
					code: true,
					text: lines.join("\n"),
				}),
				None => {
					flush_prose(&mut blocks, &mut prose);
					code = Some(Vec::new());
				}
			}
			continue;
		}

		if let Some(lines) = code.as_mut() {
			lines.push(line.to_string());
		} else if trimmed.is_empty() {
			flush_prose(&mut blocks, &mut prose);
		} else {
			if !prose.is_empty() {
				prose.push(' ');
			}
			prose.push_str(trimmed);
		}
	}

	if let Some(lines) = code {
		blocks.push(Paragraph {
			code: true,
			text: lines.join("\n"),
		});
	}
	flush_prose(&mut blocks, &mut prose);
	blocks
}

fn flush_prose(blocks: &mut Vec<Paragraph>, prose: &mut String) {
	if prose.is_empty() {
		return;
	}
	blocks.push(Paragraph {
		code: false,
		text: std::mem::take(prose),
	});
}
