//! Pure Business Logic Functions
//!
//! Zeilen-Assemblierung und Normalisierung ohne Hardware-Dependencies
//! (testbar!)

use heapless::Vec;

/// Zeilen-Leser für das line-delimited ASCII-Protokoll
///
/// Sammelt einzelne Bytes bis zum Zeilen-Terminator `\n` und normalisiert
/// die fertige Zeile in-place: ASCII-Whitespace (inkl. `\r`) an beiden
/// Enden trimmen, Rest in Kleinbuchstaben falten.
///
/// Keine Allokation, kein Kopieren: `N` ist die feste Puffer-Kapazität.
/// Bytes jenseits der Kapazität werden verworfen (die Zeile kommt dann
/// gekürzt beim Dispatcher an und wird dort i.d.R. als unbekannt gemeldet).
/// Nicht-ASCII-Bytes werden verworfen — das Protokoll ist reines ASCII.
///
/// # Beispiel
///
/// ```
/// # use esp_core::LineReader;
/// let mut reader: LineReader<64> = LineReader::new();
/// for &b in b"  ON \n" {
///     if reader.push(b) {
///         assert_eq!(reader.line(), "on");
///         reader.clear();
///     }
/// }
/// ```
pub struct LineReader<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> LineReader<N> {
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Nimmt ein Byte entgegen
    ///
    /// Gibt `true` zurück sobald eine komplette Zeile vorliegt; die Zeile
    /// ist dann bereits normalisiert und über [`Self::line`] abrufbar.
    /// Nach der Verarbeitung muss [`Self::clear`] gerufen werden.
    pub fn push(&mut self, byte: u8) -> bool {
        if byte == b'\n' {
            self.normalize();
            return true;
        }
        if byte.is_ascii() {
            // Bei vollem Puffer wird das Byte verworfen (Zeilen-Kürzung)
            let _ = self.buf.push(byte);
        }
        false
    }

    /// Die aktuell gepufferte (nach `push() == true`: normalisierte) Zeile
    pub fn line(&self) -> &str {
        // Puffer enthält nur ASCII-Bytes, from_utf8 kann nicht fehlschlagen
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Verwirft die gepufferte Zeile und beginnt eine neue
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Normalisiert in-place: trim + lowercase
    fn normalize(&mut self) {
        self.buf.iter_mut().for_each(|b| b.make_ascii_lowercase());

        let start = self
            .buf
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.buf.len());
        let end = self
            .buf
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(start, |i| i + 1);

        self.buf.copy_within(start..end, 0);
        self.buf.truncate(end - start);
    }
}

impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<const N: usize>(reader: &mut LineReader<N>, bytes: &[u8]) -> bool {
        let mut complete = false;
        for &b in bytes {
            complete = reader.push(b);
        }
        complete
    }

    #[test]
    fn test_line_reader_simple_line() {
        let mut reader: LineReader<64> = LineReader::new();
        assert!(feed(&mut reader, b"on\n"));
        assert_eq!(reader.line(), "on");
    }

    #[test]
    fn test_line_reader_trims_and_lowercases() {
        let mut reader: LineReader<64> = LineReader::new();
        assert!(feed(&mut reader, b"  Status \n"));
        assert_eq!(reader.line(), "status");
    }

    #[test]
    fn test_line_reader_handles_crlf() {
        let mut reader: LineReader<64> = LineReader::new();
        assert!(feed(&mut reader, b"OFF\r\n"));
        assert_eq!(reader.line(), "off");
    }

    #[test]
    fn test_line_reader_whitespace_only_is_empty() {
        let mut reader: LineReader<64> = LineReader::new();
        assert!(feed(&mut reader, b"   \t \r\n"));
        assert_eq!(reader.line(), "");
    }

    #[test]
    fn test_line_reader_incomplete_line() {
        let mut reader: LineReader<64> = LineReader::new();
        assert!(!feed(&mut reader, b"sta"));
    }

    #[test]
    fn test_line_reader_multiple_lines_after_clear() {
        let mut reader: LineReader<64> = LineReader::new();

        assert!(feed(&mut reader, b"ON\n"));
        assert_eq!(reader.line(), "on");
        reader.clear();

        assert!(feed(&mut reader, b"off\n"));
        assert_eq!(reader.line(), "off");
    }

    #[test]
    fn test_line_reader_overflow_truncates() {
        let mut reader: LineReader<4> = LineReader::new();
        assert!(feed(&mut reader, b"statuses\n"));
        // Nur die ersten 4 Bytes überleben die Kürzung
        assert_eq!(reader.line(), "stat");
    }

    #[test]
    fn test_line_reader_drops_non_ascii() {
        let mut reader: LineReader<64> = LineReader::new();
        assert!(feed(&mut reader, b"o\xffn\n"));
        assert_eq!(reader.line(), "on");
    }
}
