//! Pick commands for selecting faces and edges of solids.

use std::io::Write;

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Pick a face of the solid `name` by its face id.
pub fn pick_face_from_id(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    id: i64,
) -> Result<(), Error> {
    writer.write_line(&format!(
        "Pick.PickFaceFromId {}, {}",
        quote(name),
        Value::from(id).arg()
    ))?;
    Ok(())
}

/// Pick an edge of the solid `name` by its edge id, anchored at the
/// vertex with the given id.
pub fn pick_edge_from_id(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    edge_id: i64,
    vertex_id: i64,
) -> Result<(), Error> {
    writer.write_line(&format!(
        "Pick.PickEdgeFromId {}, {}, {}",
        quote(name),
        Value::from(edge_id).arg(),
        Value::from(vertex_id).arg()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_are_single_lines() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        pick_face_from_id(&mut w, "component1:body", 2).unwrap();
        pick_edge_from_id(&mut w, "component1:body", 4, 1).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Option Explicit\n\
             Pick.PickFaceFromId \"component1:body\", \"2\"\n\
             Pick.PickEdgeFromId \"component1:body\", \"4\", \"1\"\n"
        );
    }
}
