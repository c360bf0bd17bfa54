//! Renderers for labelled sequences.
//!
//! Both layouts print a ruler above and below the sequence, wrap the bases at
//! a fixed width, and end every full line with the 1-based position of its
//! last base. `g` bases inside a RIZ or REZ are upper-cased for emphasis.
//!
//! ```text
//! 1234567890
//!
//! aaGGGaGGGc   10
//!   IIIIIIII
//! GGG--GGGGG   20
//! III--EEEEE
//! ```

use crate::core::types::{LabeledBase, Region};

/// Bases per line used by the CLI and the web page
pub const DEFAULT_LINE_WIDTH: usize = 100;

const POSITION_GAP: &str = "   ";
const DIGITS: &[u8; 10] = b"0123456789";

/// A line of repeating column digits, `1234567890123...`
#[must_use]
pub fn ruler(width: usize) -> String {
    (1..=width).map(|i| char::from(DIGITS[i % 10])).collect()
}

/// The character shown for a labelled base
#[must_use]
pub fn display_base(label: &LabeledBase) -> char {
    match label.region {
        Region::Riz | Region::Rez if label.base == 'g' => 'G',
        _ => label.base,
    }
}

/// Marker used on the text track line under each row
#[must_use]
pub fn track_symbol(region: Region) -> char {
    match region {
        Region::Outside => ' ',
        Region::Riz => 'I',
        Region::Linker => '-',
        Region::Rez => 'E',
    }
}

/// Plain-text layout with a track line under every row that touches a region.
#[must_use]
pub fn render_text(labels: &[LabeledBase], width: usize) -> String {
    let width = width.max(1);
    let ruler = ruler(width);
    let mut out = String::with_capacity(labels.len() * 2 + ruler.len() * 2 + 8);

    out.push_str(&ruler);
    out.push_str("\n\n");
    for (row, chunk) in labels.chunks(width).enumerate() {
        out.extend(chunk.iter().map(display_base));
        if chunk.len() == width {
            out.push_str(&format!("{POSITION_GAP}{}", (row + 1) * width));
        }
        out.push('\n');

        if chunk.iter().any(|l| l.region != Region::Outside) {
            let track: String = chunk.iter().map(|l| track_symbol(l.region)).collect();
            out.push_str(track.trim_end());
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&ruler);
    out.push('\n');
    out
}

/// HTML layout for a `<pre>` block.
///
/// Runs of bases from one region are wrapped in a single
/// `<span class="riz|linker|rez">`; ruler and positions use `class="axis"`.
#[must_use]
pub fn render_html(labels: &[LabeledBase], width: usize) -> String {
    let width = width.max(1);
    let ruler = format!("<span class=\"axis\">{}</span>", ruler(width));
    let mut out = String::with_capacity(labels.len() * 2 + ruler.len() * 2);

    out.push_str(&ruler);
    out.push_str("\n\n");
    for (row, chunk) in labels.chunks(width).enumerate() {
        let mut rest = chunk;
        while let Some(first) = rest.first() {
            let run = rest
                .iter()
                .position(|l| l.region != first.region)
                .unwrap_or(rest.len());
            let (run_labels, tail) = rest.split_at(run);
            push_run(&mut out, first.region, run_labels);
            rest = tail;
        }
        if chunk.len() == width {
            out.push_str(&format!(
                "{POSITION_GAP}<span class=\"axis\">{}</span>\n",
                (row + 1) * width
            ));
        }
    }
    out.push_str("\n\n");
    out.push_str(&ruler);
    out
}

fn push_run(out: &mut String, region: Region, labels: &[LabeledBase]) {
    if region != Region::Outside {
        out.push_str(&format!("<span class=\"{}\">", region.tag()));
    }
    for label in labels {
        push_escaped(out, display_base(label));
    }
    if region != Region::Outside {
        out.push_str("</span>");
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}
