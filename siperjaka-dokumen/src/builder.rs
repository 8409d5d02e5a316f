//! Document layout builder
//!
//! Provides a fluent API for building fixed-width plain-text pages.
//! Identical call sequences produce byte-identical output.

/// Document layout builder
///
/// Lays text out over a fixed page width in characters.
pub struct DocBuilder {
    buf: String,
    width: usize,
}

impl DocBuilder {
    /// Create a new builder with the specified page width in characters
    ///
    /// Common widths:
    /// - A4 portrait at typewriter pitch: 96 characters
    /// - narrow attachments: 64 characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(4096),
            width,
        }
    }

    /// Get the configured page width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text without a line break
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by a line break
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write multiple empty lines (signature space)
    pub fn feed(&mut self, lines: usize) -> &mut Self {
        for _ in 0..lines {
            self.buf.push('\n');
        }
        self
    }

    // === Alignment ===

    /// Write a line centered within the page width
    pub fn center(&mut self, s: &str) -> &mut Self {
        let len = s.chars().count();
        if len >= self.width {
            return self.line(s);
        }
        let pad = (self.width - len) / 2;
        let mut line = " ".repeat(pad);
        line.push_str(s);
        self.line(&line)
    }

    /// Write a line starting at a fixed left offset
    pub fn indented(&mut self, indent: usize, s: &str) -> &mut Self {
        let mut line = " ".repeat(indent);
        line.push_str(s);
        self.line(line.trim_end())
    }

    // === Paragraphs ===

    /// Write a word-wrapped paragraph flush with the left margin
    pub fn para(&mut self, s: &str) -> &mut Self {
        self.para_indent(0, 0, s)
    }

    /// Write a word-wrapped paragraph with a first-line indent and a
    /// hanging indent for continuation lines
    pub fn para_indent(&mut self, first: usize, cont: usize, s: &str) -> &mut Self {
        let mut words = s.split_whitespace();
        let Some(first_word) = words.next() else {
            return self.blank();
        };

        let mut line = " ".repeat(first);
        line.push_str(first_word);
        let mut len = first + first_word.chars().count();

        for word in words {
            let wlen = word.chars().count();
            if len + 1 + wlen > self.width {
                self.buf.push_str(&line);
                self.buf.push('\n');
                line = " ".repeat(cont);
                line.push_str(word);
                len = cont + wlen;
            } else {
                line.push(' ');
                line.push_str(word);
                len += 1 + wlen;
            }
        }
        self.line(&line)
    }

    // === Tables ===

    /// Write a label/value row with the colon column aligned at
    /// `indent + label_width`
    pub fn kv(&mut self, indent: usize, label_width: usize, label: &str, value: &str) -> &mut Self {
        let row = format!(
            "{:indent$}{:<label_width$}: {}",
            "", label, value,
        );
        self.line(row.trim_end())
    }

    /// Write a marked label/value row (`I.`, `1.`, `a.` style markers)
    ///
    /// The marker occupies its own fixed column before the label, so
    /// continuation rows written with an empty marker stay aligned.
    pub fn kv_marked(
        &mut self,
        indent: usize,
        marker_width: usize,
        marker: &str,
        label_width: usize,
        label: &str,
        value: &str,
    ) -> &mut Self {
        let row = format!(
            "{:indent$}{:<marker_width$}{:<label_width$}: {}",
            "", marker, label, value,
        );
        self.line(row.trim_end())
    }

    // === Separators ===

    /// Write a line of '=' characters across the page
    pub fn sep_double(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.line(&sep)
    }

    /// Write a line of '-' characters across the page
    pub fn sep_single(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    // === Layout Helpers ===

    /// Write two columns side by side, each line centered within its half
    /// of the page (signature grids)
    pub fn columns(&mut self, left: &[&str], right: &[&str]) -> &mut Self {
        let col = self.width / 2;
        let rows = left.len().max(right.len());
        for i in 0..rows {
            let l = left.get(i).copied().unwrap_or("");
            let r = right.get(i).copied().unwrap_or("");
            let mut line = centered_cell(l, col);
            line.push_str(&centered_cell(r, col));
            self.line(line.trim_end());
        }
        self
    }

    /// Consume the builder and return the laid-out page
    pub fn build(self) -> String {
        self.buf
    }
}

/// Center text within a cell of exactly `width` characters (wider cells are
/// emitted as-is)
fn centered_cell(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let lpad = (width - len) / 2;
    let rpad = width - len - lpad;
    let mut cell = " ".repeat(lpad);
    cell.push_str(s);
    cell.push_str(&" ".repeat(rpad));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let mut b = DocBuilder::new(20);
        b.center("JUDUL");
        assert_eq!(b.build(), "       JUDUL\n");
    }

    #[test]
    fn test_center_wider_than_page() {
        let mut b = DocBuilder::new(4);
        b.center("PANJANG");
        assert_eq!(b.build(), "PANJANG\n");
    }

    #[test]
    fn test_kv_alignment() {
        let mut b = DocBuilder::new(60);
        b.kv(2, 10, "Nama", "Budi");
        b.kv(2, 10, "Jabatan", "Pranata");
        let out = b.build();
        assert_eq!(out, "  Nama      : Budi\n  Jabatan   : Pranata\n");
    }

    #[test]
    fn test_kv_marked_continuation_alignment() {
        let mut b = DocBuilder::new(70);
        b.kv_marked(0, 4, "I.", 10, "Nama", "Budi");
        b.kv_marked(0, 4, "", 10, "Jabatan", "Pranata");
        let out = b.build();
        let lines: Vec<&str> = out.lines().collect();
        let colon0 = lines[0].find(':').unwrap();
        let colon1 = lines[1].find(':').unwrap();
        assert_eq!(colon0, colon1);
    }

    #[test]
    fn test_para_wraps_at_width() {
        let mut b = DocBuilder::new(20);
        b.para("satu dua tiga empat lima enam tujuh");
        let out = b.build();
        for line in out.lines() {
            assert!(line.chars().count() <= 20, "line too long: {line:?}");
        }
        assert!(out.lines().count() > 1);
    }

    #[test]
    fn test_para_indent_hanging() {
        let mut b = DocBuilder::new(24);
        b.para_indent(5, 0, "kata kata kata kata kata kata kata");
        let out = b.build();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("     kata"));
        assert!(lines[1].starts_with("kata"));
    }

    #[test]
    fn test_para_empty_is_blank_line() {
        let mut b = DocBuilder::new(24);
        b.para("");
        assert_eq!(b.build(), "\n");
    }

    #[test]
    fn test_separators() {
        let mut b = DocBuilder::new(8);
        b.sep_double().sep_single();
        assert_eq!(b.build(), "========\n--------\n");
    }

    #[test]
    fn test_columns() {
        let mut b = DocBuilder::new(40);
        b.columns(&["KIRI", "aaa"], &["KANAN"]);
        let out = b.build();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        // left cell centered in the first 20 chars, right in the second
        assert_eq!(&lines[0][0..20], "        KIRI        ");
        assert!(lines[0].trim_end().ends_with("KANAN"));
        assert_eq!(lines[1].trim_end(), "        aaa");
    }

    #[test]
    fn test_deterministic() {
        let render = || {
            let mut b = DocBuilder::new(48);
            b.center("SURAT");
            b.sep_double();
            b.kv(0, 8, "Nama", "Budi");
            b.para("kalimat panjang yang dibungkus pada lebar halaman tetap");
            b.build()
        };
        assert_eq!(render(), render());
    }
}
