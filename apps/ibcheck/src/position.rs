//! Byte offset to line/column conversion.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// Characters since the preceding line break.
    pub column: usize,
}

/// Resolve `offset` (bytes from the start of `buffer`) into a position.
///
/// The prefix before `offset` is split on `\n`; the line is the number of
/// segments and the column is the character length of the last one. Offsets
/// past the end or inside a multi-byte character are clamped down to the
/// nearest character boundary.
pub fn resolve(buffer: &str, offset: usize) -> Position {
    let prefix = &buffer[..clamp(buffer, offset)];
    let mut line = 1;
    let mut last = prefix;
    for (i, b) in prefix.bytes().enumerate() {
        if b == b'\n' {
            line += 1;
            last = &prefix[i + 1..];
        }
    }
    Position {
        line,
        column: last.chars().count(),
    }
}

fn clamp(buffer: &str, offset: usize) -> usize {
    let mut end = offset.min(buffer.len());
    while !buffer.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Resolves a series of offsets over one buffer, scanning forward from the
/// previous offset instead of from the start. Same rules as [`resolve`].
pub struct LineCursor<'a> {
    buffer: &'a str,
    offset: usize,
    line: usize,
    line_start: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(buffer: &'a str) -> Self {
        LineCursor {
            buffer,
            offset: 0,
            line: 1,
            line_start: 0,
        }
    }

    pub fn advance(&mut self, offset: usize) -> Position {
        let target = clamp(self.buffer, offset);
        if target < self.offset {
            *self = LineCursor::new(self.buffer);
        }
        let skipped = &self.buffer.as_bytes()[self.offset..target];
        for (i, b) in skipped.iter().enumerate() {
            if *b == b'\n' {
                self.line += 1;
                self.line_start = self.offset + i + 1;
            }
        }
        self.offset = target;
        Position {
            line: self.line,
            column: self.buffer[self.line_start..target].chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_buffer() {
        assert_eq!(resolve("class A {}", 0), Position { line: 1, column: 0 });
    }

    #[test]
    fn test_offset_on_later_line() {
        let src = "class A {\n    @IBOutlet var label: UILabel!\n}";
        let offset = src.find("label").unwrap();
        assert_eq!(resolve(src, offset), Position { line: 2, column: 18 });
    }

    #[test]
    fn test_offset_right_after_line_break() {
        let src = "a\nb";
        assert_eq!(resolve(src, 2), Position { line: 2, column: 0 });
    }

    #[test]
    fn test_column_counts_characters_not_bytes() {
        let src = "// żółw\nlet ü = 1";
        let offset = src.find('=').unwrap();
        assert_eq!(resolve(src, offset), Position { line: 2, column: 6 });
        // Inside the two-byte 'ż' the offset is clamped back to its start.
        assert_eq!(resolve(src, 4), Position { line: 1, column: 3 });
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(resolve("ab\nc", 100), Position { line: 2, column: 1 });
    }

    #[test]
    fn test_cursor_agrees_with_resolve() {
        let src = "<a>\n  <b/>\n  <żc/>\n<d/>";
        let mut cursor = LineCursor::new(src);
        for needle in ["<a>", "<b/>", "c/>", "<d/>"] {
            let offset = src.find(needle).unwrap();
            assert_eq!(cursor.advance(offset), resolve(src, offset));
        }
        // Moving backwards restarts from the top.
        let offset = src.find("<b/>").unwrap();
        assert_eq!(cursor.advance(offset), Position { line: 2, column: 2 });
    }
}
