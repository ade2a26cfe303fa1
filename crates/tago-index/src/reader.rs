//! Splits an existing tags buffer back into its per-file sections.

use crate::assembler::PAGE_BREAK;
use tago_core::TagoError;

/// One file's section of a tags buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub file_name: String,
    /// Exactly the bytes announced by the section header.
    pub body: &'a [u8],
}

impl<'a> Section<'a> {
    /// The record lines of this section, newlines stripped.
    pub fn records(&self) -> impl Iterator<Item = &'a [u8]> {
        let body = self.body;
        body.strip_suffix(b"\n")
            .unwrap_or(body)
            .split(|b| *b == b'\n')
            .filter(move |_| !body.is_empty())
    }
}

/// Read every section of `data`, trusting each header's byte length.
pub fn read_sections(data: &[u8]) -> Result<Vec<Section<'_>>, TagoError> {
    let mut sections = Vec::new();
    let mut pos = 0usize;

    while pos < data.len() {
        if data.get(pos..pos + 2) != Some(&[PAGE_BREAK, b'\n'][..]) {
            return Err(malformed(pos, "expected page break"));
        }
        pos += 2;

        let header_end = data[pos..]
            .iter()
            .position(|b| *b == b'\n')
            .map(|i| pos + i)
            .ok_or_else(|| malformed(pos, "unterminated section header"))?;
        let header = std::str::from_utf8(&data[pos..header_end])
            .map_err(|_| malformed(pos, "section header is not UTF-8"))?;
        let (file_name, len) = header
            .rsplit_once(',')
            .ok_or_else(|| malformed(pos, "section header has no length"))?;
        let len: usize = len
            .parse()
            .map_err(|_| malformed(pos, "section length is not a number"))?;
        pos = header_end + 1;

        let body = pos
            .checked_add(len)
            .and_then(|end| data.get(pos..end))
            .ok_or_else(|| malformed(pos, "section runs past end of data"))?;
        sections.push(Section {
            file_name: file_name.to_string(),
            body,
        });
        pos += len;
    }

    Ok(sections)
}

fn malformed(pos: usize, what: &str) -> TagoError {
    TagoError::MalformedIndex(format!("{what} at byte {pos}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_sections_in_order() {
        let data = b"\x0c\na.go,6\nLA1,0\n\x0c\nb.go,13\nLB1,0\nLC2,10\n";
        let sections = read_sections(data).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].file_name, "a.go");
        assert_eq!(sections[0].body, b"LA1,0\n");
        assert_eq!(sections[1].file_name, "b.go");
        let records: Vec<_> = sections[1].records().collect();
        assert_eq!(records, vec![&b"LB1,0"[..], &b"LC2,10"[..]]);
    }

    #[test]
    fn empty_section_has_no_records() {
        let sections = read_sections(b"\x0c\nempty.go,0\n").unwrap();
        assert_eq!(sections[0].body, b"");
        assert_eq!(sections[0].records().count(), 0);
    }

    #[test]
    fn file_names_may_contain_commas() {
        let sections = read_sections(b"\x0c\ndir,x/a.go,2\nZ\n").unwrap();
        assert_eq!(sections[0].file_name, "dir,x/a.go");
    }

    #[test]
    fn empty_data_has_no_sections() {
        assert!(read_sections(b"").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_data() {
        for data in [
            &b"a.go,0\n"[..],
            &b"\x0c\na.go,0"[..],
            &b"\x0c\na.go\n"[..],
            &b"\x0c\na.go,x\n"[..],
            &b"\x0c\na.go,10\nshort\n"[..],
            &b"\x0c\na.go,18446744073709551615\nx"[..],
        ] {
            assert!(
                matches!(read_sections(data), Err(TagoError::MalformedIndex(_))),
                "{:?}",
                data
            );
        }
    }

    #[test]
    fn length_mismatch_is_detected() {
        // header claims one byte too few, so the next section doesn't start at a page break
        let data = b"\x0c\na.go,5\nLA1,0\n\x0c\nb.go,0\n";
        assert!(read_sections(data).is_err());
    }
}
