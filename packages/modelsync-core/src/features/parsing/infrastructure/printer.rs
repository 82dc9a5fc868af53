//! Format-preserving printer
//!
//! Untouched nodes print as their verbatim buffer slice. Dirty nodes are
//! rebuilt from their children, reusing the original text between child
//! slots. Object literals that gained or lost entries get separators
//! synthesized in the style of the surrounding literal.
//!
//! Comments inside an object literal belong to a neighbouring entry: a
//! comment that ends the line of an entry (or sits before its comma) goes
//! with that entry, any other comment goes with the entry below it.
//! Comments above the first entry or below the last one belong to the
//! object itself and are always kept.

use std::ops::Range;

use crate::features::parsing::domain::{BufferId, NodeId, Origin, SourceDocument, SyntaxKind};
use crate::shared::utils::text::{ends_in_line_comment, line_indent, reindent};

impl SourceDocument {
    /// Full file text with all mutations applied
    pub fn print(&self) -> String {
        let root = self.root();
        let source = self.source();
        let Some(range) = self.node(root).range() else {
            return self.print_node(root);
        };
        let mut out = String::with_capacity(source.len() + 64);
        out.push_str(&source[..range.start]);
        Printer::new(self).write(root, "", BufferId::FILE, &mut out);
        out.push_str(&source[range.end..]);
        out
    }

    /// Current text of one subtree, relative to its own first line
    pub fn print_node(&self, id: NodeId) -> String {
        let ctx = self.node(id).buffer().unwrap_or(BufferId::FILE);
        let mut out = String::new();
        Printer::new(self).write(id, "", ctx, &mut out);
        out
    }
}

/// An entry of the original literal and the text it owns
struct Slot {
    id: NodeId,
    span: Range<usize>,
    /// Start of the comments above the entry
    lead: Option<usize>,
    comma: Option<Range<usize>>,
    /// End of the comma and the trailing comments
    tail_end: usize,
    /// The tail ends inside a `//` comment
    line_comment: bool,
}

/// Original shape of a parsed object literal
struct Layout {
    /// End of `{`
    open_end: usize,
    /// Start of `}`
    close_start: usize,
    slots: Vec<Slot>,
}

struct Printer<'a> {
    doc: &'a SourceDocument,
}

impl<'a> Printer<'a> {
    fn new(doc: &'a SourceDocument) -> Self {
        Self { doc }
    }

    /// `base` is the indentation of the line the node starts on and `ctx` the
    /// buffer of the nearest parsed ancestor; both only matter for synthetic
    /// nodes, parsed ones derive them from their own buffer.
    fn write(&self, id: NodeId, base: &str, ctx: BufferId, out: &mut String) {
        let node = self.doc.node(id);
        match &node.origin {
            Origin::Synthetic { text: Some(text) } if node.children.is_empty() => {
                out.push_str(text)
            }
            Origin::Synthetic { .. } => self.write_synthetic(id, base, ctx, out),
            Origin::Parsed { .. } if !node.dirty => {
                out.push_str(self.doc.original_text(id).unwrap_or_default())
            }
            Origin::Parsed { .. } if node.kind == SyntaxKind::Object => self.write_object(id, out),
            Origin::Parsed { .. } => self.write_slots(id, out),
        }
    }

    /// Write a child, shifting transplanted text onto the `base` indentation
    fn write_child(&self, child: NodeId, base: &str, ctx: BufferId, out: &mut String) {
        match self.doc.node(child).buffer() {
            Some(buffer) if buffer != ctx => {
                let mut text = String::new();
                self.write(child, "", buffer, &mut text);
                out.push_str(&reindent(&text, base, self.doc.newline()));
            }
            _ => self.write(child, base, ctx, out),
        }
    }

    fn write_synthetic(&self, id: NodeId, base: &str, ctx: BufferId, out: &mut String) {
        let node = self.doc.node(id);
        let nl = self.doc.newline();
        match node.kind {
            SyntaxKind::Object => {
                if node.children.is_empty() {
                    out.push_str("{}");
                    return;
                }
                let inner = format!("{}{}", base, self.doc.indent_unit());
                out.push('{');
                for (i, entry) in node.children.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(nl);
                    out.push_str(&inner);
                    self.write_child(*entry, &inner, ctx, out);
                }
                out.push_str(nl);
                out.push_str(base);
                out.push('}');
            }
            SyntaxKind::Pair => {
                for (i, child) in node.children.iter().enumerate() {
                    if i > 0 {
                        out.push_str(": ");
                    }
                    self.write_child(*child, base, ctx, out);
                }
            }
            _ => {
                for child in &node.children {
                    self.write_child(*child, base, ctx, out);
                }
            }
        }
    }

    /// Dirty parsed node whose child list kept its shape
    fn write_slots(&self, id: NodeId, out: &mut String) {
        let node = self.doc.node(id);
        let (Some(buffer), Some(range)) = (node.buffer(), node.range()) else {
            return;
        };
        let text = self.doc.buffer(buffer);

        if node.children.len() != node.original_children.len() {
            let base = line_indent(text, range.start);
            for child in &node.children {
                self.write_child(*child, base, buffer, out);
            }
            return;
        }

        let mut cursor = range.start;
        for (orig, child) in node.original_children.iter().zip(&node.children) {
            let Some(slot) = self.doc.node(*orig).range() else {
                continue;
            };
            out.push_str(&text[cursor..slot.start]);
            self.write_child(*child, line_indent(text, slot.start), buffer, out);
            cursor = slot.end;
        }
        out.push_str(&text[cursor..range.end]);
    }

    fn write_object(&self, id: NodeId, out: &mut String) {
        let node = self.doc.node(id);
        let (Some(buffer), Some(range)) = (node.buffer(), node.range()) else {
            return;
        };
        let text = self.doc.buffer(buffer);
        let base = line_indent(text, range.start);
        let nl = self.doc.newline();
        let layout = self.layout(id, text, &range);
        let open = &text[range.start..layout.open_end];
        let close = &text[layout.close_start..range.end];
        let current: Vec<NodeId> = node
            .children
            .iter()
            .copied()
            .filter(|c| self.doc.kind(*c).is_object_entry())
            .collect();

        let slots = &layout.slots;
        let (Some(first), Some(last)) = (slots.first(), slots.last()) else {
            if current.is_empty() {
                out.push_str(&text[range.clone()]);
            } else {
                let inner = &text[layout.open_end..layout.close_start];
                self.write_expanded(&current, inner, base, buffer, out);
            }
            return;
        };
        let prefix = &text[layout.open_end..first.span.start];
        let suffix = &text[last.tail_end..layout.close_start];

        if current.is_empty() {
            let kept = format!("{}{}", prefix.trim_end(), suffix.trim_end());
            if kept.trim().is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str(open);
            out.push_str(&kept);
            if kept.contains('\n') || ends_in_line_comment(&kept) {
                out.push_str(nl);
                out.push_str(base);
            } else {
                out.push(' ');
            }
            out.push_str(close);
            return;
        }

        let (multiline, entry_indent) = match prefix.rfind('\n') {
            Some(at) => (true, line_indent(prefix, at + 1).to_string()),
            None => (false, base.to_string()),
        };
        let line_break = format!("{nl}{entry_indent}");
        let gap_before = |q: usize| {
            let slot = &slots[q];
            &text[slots[q - 1].tail_end..slot.lead.unwrap_or(slot.span.start)]
        };
        let trailing_comma = last.comma.is_some();
        let positions: Vec<Option<usize>> =
            current.iter().map(|entry| self.slot_of(slots, *entry)).collect();

        out.push_str(open);
        out.push_str(prefix);
        let mut open_comment = false;
        for (k, entry) in current.iter().enumerate() {
            if k > 0 {
                let gap = match (positions[k - 1], positions[k]) {
                    (_, Some(q)) if q > 0 => gap_before(q),
                    (Some(p), _) if p + 1 < slots.len() => gap_before(p + 1),
                    _ if multiline => line_break.as_str(),
                    _ => " ",
                };
                if open_comment && !gap.contains('\n') {
                    out.push_str(&line_break);
                } else {
                    out.push_str(gap);
                }
            }

            let slot = positions[k].map(|q| &slots[q]);
            if let Some(lead) = slot.and_then(|s| s.lead.map(|l| l..s.span.start)) {
                out.push_str(&text[lead]);
            }
            self.write_child(*entry, &entry_indent, buffer, out);

            let want_comma = k + 1 < current.len() || trailing_comma;
            match slot {
                Some(s) => {
                    match (&s.comma, want_comma) {
                        (Some(comma), false) => {
                            out.push_str(&text[s.span.end..comma.start]);
                            out.push_str(&text[comma.end..s.tail_end]);
                        }
                        (None, true) => {
                            out.push(',');
                            out.push_str(&text[s.span.end..s.tail_end]);
                        }
                        _ => out.push_str(&text[s.span.end..s.tail_end]),
                    }
                    open_comment = s.line_comment;
                }
                None => {
                    if want_comma {
                        out.push(',');
                    }
                    open_comment = false;
                }
            }
        }

        if open_comment && !suffix.contains('\n') {
            out.push_str(nl);
            out.push_str(base);
            out.push_str(suffix.trim_start());
        } else {
            out.push_str(suffix);
        }
        out.push_str(close);
    }

    /// Object that had no entries: entries go on their own lines below any
    /// comments it held
    fn write_expanded(
        &self,
        current: &[NodeId],
        inner: &str,
        base: &str,
        buffer: BufferId,
        out: &mut String,
    ) {
        let nl = self.doc.newline();
        let comments = inner.trim_end();
        let indent = match comments.rfind('\n') {
            Some(at) if !comments.trim().is_empty() => line_indent(comments, at + 1).to_string(),
            _ => format!("{base}{}", self.doc.indent_unit()),
        };

        out.push('{');
        if !comments.trim().is_empty() {
            out.push_str(comments);
        }
        for (k, entry) in current.iter().enumerate() {
            if k > 0 {
                out.push(',');
            }
            out.push_str(nl);
            out.push_str(&indent);
            self.write_child(*entry, &indent, buffer, out);
        }
        out.push_str(nl);
        out.push_str(base);
        out.push('}');
    }

    fn layout(&self, id: NodeId, text: &str, range: &Range<usize>) -> Layout {
        let node = self.doc.node(id);
        let open_end = node
            .original_children
            .first()
            .and_then(|c| self.doc.node(*c).range())
            .map_or(range.start + 1, |r| r.end);
        let close_start = node
            .original_children
            .last()
            .and_then(|c| self.doc.node(*c).range())
            .map_or(range.end - 1, |r| r.start);

        let mut slots: Vec<Slot> = Vec::new();
        let mut gap: Vec<NodeId> = Vec::new();
        for child in &node.original_children {
            let Some(span) = self.doc.node(*child).range() else {
                continue;
            };
            if span.start < open_end || span.end > close_start {
                continue;
            }
            if !self.doc.kind(*child).is_object_entry() {
                gap.push(*child);
                continue;
            }
            let lead = match slots.last_mut() {
                Some(prev) => self.close_gap(text, prev, &gap, Some(span.start)),
                None => None,
            };
            gap.clear();
            slots.push(Slot {
                id: *child,
                tail_end: span.end,
                span,
                lead,
                comma: None,
                line_comment: false,
            });
        }
        if let Some(last) = slots.last_mut() {
            self.close_gap(text, last, &gap, None);
        }

        Layout {
            open_end,
            close_start,
            slots,
        }
    }

    /// Hand `prev` its comma and trailing comments; returns where the
    /// comments above the next entry start
    fn close_gap(
        &self,
        text: &str,
        prev: &mut Slot,
        gap: &[NodeId],
        next_start: Option<usize>,
    ) -> Option<usize> {
        let comma_at = gap.iter().position(|c| self.doc.node(*c).raw_kind == ",");
        let mut lead = None;
        for (i, item) in gap.iter().enumerate() {
            let Some(r) = self.doc.node(*item).range() else {
                continue;
            };
            if Some(i) == comma_at {
                prev.tail_end = prev.tail_end.max(r.end);
                prev.line_comment = false;
                prev.comma = Some(r);
                continue;
            }
            if self.doc.kind(*item) != SyntaxKind::Comment {
                continue;
            }
            let before_comma = comma_at.is_some_and(|c| i < c);
            let same_line = !text[prev.span.end..r.start].contains('\n');
            let ends_line = next_start.map_or(true, |n| text[r.end..n].contains('\n'));
            if lead.is_none() && (before_comma || (same_line && ends_line)) {
                prev.tail_end = r.end;
                prev.line_comment = text[r.clone()].starts_with("//");
            } else if lead.is_none() {
                lead = Some(r.start);
            }
        }
        lead
    }

    /// Original slot an entry occupies, following replacements back
    fn slot_of(&self, slots: &[Slot], entry: NodeId) -> Option<usize> {
        let mut current = Some(entry);
        while let Some(id) = current {
            if let Some(p) = slots.iter().position(|s| s.id == id) {
                return Some(p);
            }
            current = self.doc.node(id).replaces;
        }
        None
    }
}
