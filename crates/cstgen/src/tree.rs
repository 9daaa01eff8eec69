//! Navigation tree commands.

use std::io::Write;

use cstgen_vba::{quote, VbaWriter};

use crate::error::Error;

/// Select an item from the navigation tree, e.g.
/// `2D/3D Results\E-Field\e1`.
pub fn select_tree_item(writer: &mut VbaWriter<impl Write>, tree_path: &str) -> Result<(), Error> {
    writer.write_line(&format!("SelectTreeItem {}", quote(tree_path)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_quoted_path() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        select_tree_item(&mut w, "2D/3D Results\\E-Field\\e1").unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Option Explicit\nSelectTreeItem \"2D/3D Results\\E-Field\\e1\"\n"
        );
    }
}
