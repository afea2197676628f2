//! Plain-text rendering of pages and lookups.

use std::io::{self, Write};

use crate::deriver::{Lookup, Page};

/// Renders a page as a fixed-width table with navigation lines.
pub fn render_page<W: Write>(out: &mut W, page: &Page) -> io::Result<()> {
    writeln!(out, "Page {} out of {}", page.number, page.page_count)?;
    write_navigation(out, page)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<51}  {:>34}  {:>34}",
        "Private Key", "Address", "Compressed Address"
    )?;

    for key in &page.keys {
        writeln!(
            out,
            "{:<51}  {:>34}  {:>34}",
            key.private_key, key.uncompressed, key.compressed
        )?;
    }

    writeln!(out)?;
    write_navigation(out, page)
}

fn write_navigation<W: Write>(out: &mut W, page: &Page) -> io::Result<()> {
    let previous = page
        .previous
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let next = page
        .next
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    writeln!(out, "previous: {previous} | next: {next}")
}

/// Renders where a key lives, including a `page#anchor` locator.
pub fn render_lookup<W: Write>(out: &mut W, lookup: &Lookup) -> io::Result<()> {
    writeln!(out, "Index:   {}", lookup.index)?;
    writeln!(out, "Page:    {}", lookup.page)?;
    writeln!(out, "Locator: /{}#{}", lookup.page, lookup.anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Network;
    use crate::deriver::KeyDeriver;
    use crate::keyspace::Keyspace;
    use num_bigint::BigUint;

    fn render(page: &Page) -> String {
        let mut buf = Vec::new();
        render_page(&mut buf, page).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_first_page() {
        let deriver = KeyDeriver::new(Keyspace::new(BigUint::from(10u32), 4), Network::Mainnet);
        let page = deriver.derive_page(&BigUint::from(1u32)).unwrap();
        let text = render(&page);

        assert!(text.starts_with("Page 1 out of 3\n"));
        assert!(text.contains("previous: - | next: 2"));
        assert!(text.contains("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"));
        assert!(text.contains("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));
        // header, 4 keys, navigation twice, title, two blank lines
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_render_lookup() {
        let lookup = Lookup {
            index: BigUint::from(300u32),
            page: BigUint::from(3u32),
            anchor: "5Hwgr3u458GLafKBgxtssHSPqJnYoGrSzgQsPwLFhLNYskDPyyA".into(),
        };
        let mut buf = Vec::new();
        render_lookup(&mut buf, &lookup).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Page:    3"));
        assert!(text.contains("Locator: /3#5Hwgr3u458GLafKBgxtssHSPqJnYoGrSzgQsPwLFhLNYskDPyyA"));
    }
}
