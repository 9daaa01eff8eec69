//! Line-oriented writer for CST VBA macro scripts.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::VbaError;
use crate::value::{Value, VbaType};

/// Scope label for the `Sub Main` entry point.
const MAIN_SCOPE: &str = "Main";

/// A declared macro parameter: its VBA type and the value last assigned.
#[derive(Debug, Clone)]
struct Param {
    ty: VbaType,
    value: Option<Value>,
}

/// Writer that serializes emit calls into an indented VBA macro.
///
/// Owns the output sink for its lifetime. Tracks the `With`-block nesting
/// depth (one tab per level), the current scope, and every parameter
/// declared so far, so that assignments to undeclared parameters are
/// rejected before anything is emitted for them.
///
/// Not for concurrent use: all state is private mutable state of one
/// instance, and a macro is a single linear emission sequence.
pub struct VbaWriter<W: Write> {
    sink: W,
    indent_depth: usize,
    current_scope: Option<String>,
    params: HashMap<(String, Option<String>), Param>,
}

impl VbaWriter<BufWriter<File>> {
    /// Create `path` (and any missing parent directories) and open a
    /// buffered writer over it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, VbaError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> VbaWriter<W> {
    /// Wrap `sink` and emit the `Option Explicit` prologue every generated
    /// macro starts with.
    pub fn new(sink: W) -> Result<Self, VbaError> {
        let mut writer = Self {
            sink,
            indent_depth: 0,
            current_scope: None,
            params: HashMap::new(),
        };
        writer.write_line("Option Explicit")?;
        Ok(writer)
    }

    /// Write one statement at the current indentation depth.
    ///
    /// Also the escape hatch for emitting VBA that has no dedicated
    /// emitter yet.
    pub fn write_line(&mut self, text: &str) -> Result<(), VbaError> {
        for _ in 0..self.indent_depth {
            self.sink.write_all(b"\t")?;
        }
        self.sink.write_all(text.as_bytes())?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Current block nesting depth. Zero outside all blocks; a well-formed
    /// macro ends at zero.
    pub fn depth(&self) -> usize {
        self.indent_depth
    }

    /// Open a `With <object>` block.
    pub fn begin_with(&mut self, object: &str) -> Result<(), VbaError> {
        self.write_line(&format!("With {object}"))?;
        self.indent_depth += 1;
        Ok(())
    }

    /// Close the innermost `With` block.
    ///
    /// Fails with [`VbaError::UnbalancedBlock`] when no block is open;
    /// nothing is emitted in that case.
    pub fn end_with(&mut self) -> Result<(), VbaError> {
        if self.indent_depth == 0 {
            return Err(VbaError::UnbalancedBlock);
        }
        self.indent_depth -= 1;
        self.write_line("End With")
    }

    /// Open a `With` block, run `f` inside it, and close it again.
    ///
    /// The entry depth is restored when `f` fails; the closing line is
    /// only written on success, since a macro that failed mid-generation
    /// is discarded as a whole.
    pub fn with_block<E: From<VbaError>>(
        &mut self,
        object: &str,
        f: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<(), E> {
        let depth = self.indent_depth;
        self.begin_with(object)?;
        match f(self) {
            Ok(()) => Ok(self.end_with()?),
            Err(e) => {
                self.indent_depth = depth;
                Err(e)
            }
        }
    }

    /// Open the `Sub Main ()` entry point and make it the current scope.
    pub fn begin_main(&mut self) -> Result<(), VbaError> {
        self.write_line("Sub Main ()")?;
        self.current_scope = Some(MAIN_SCOPE.to_string());
        self.indent_depth += 1;
        Ok(())
    }

    /// Close the entry point: persist the project with `Save`, dedent,
    /// emit `End Sub`, and clear the scope.
    ///
    /// Fails with [`VbaError::MainNotEntered`] when the `Main` scope is
    /// not current.
    pub fn end_main(&mut self) -> Result<(), VbaError> {
        if self.current_scope.as_deref() != Some(MAIN_SCOPE) {
            return Err(VbaError::MainNotEntered);
        }
        self.write_line("Save")?;
        self.indent_depth -= 1;
        self.write_line("End Sub")?;
        self.current_scope = None;
        Ok(())
    }

    /// Run `f` inside the `Sub Main` entry point.
    ///
    /// Scope and depth are restored even when `f` fails, so the writer
    /// never leaks an entered scope; the `Save` / `End Sub` trailer is
    /// only written on success.
    pub fn with_main<E: From<VbaError>>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<(), E> {
        let depth = self.indent_depth;
        let scope = self.current_scope.clone();
        self.begin_main()?;
        match f(self) {
            Ok(()) => Ok(self.end_main()?),
            Err(e) => {
                self.indent_depth = depth;
                self.current_scope = scope;
                Err(e)
            }
        }
    }

    /// Declare a parameter in the current scope without assigning it,
    /// emitting `Dim <name> As <Type>`.
    ///
    /// Re-declaring the same name in the same scope overwrites the
    /// previous record.
    pub fn declare(&mut self, name: &str, ty: VbaType) -> Result<(), VbaError> {
        self.write_line(&format!("Dim {name} As {ty}"))?;
        self.params
            .insert(self.key(name), Param { ty, value: None });
        Ok(())
    }

    /// Assign a value to a previously declared parameter, emitting
    /// `<name> = <literal>`.
    ///
    /// The parameter must have been declared under the current scope;
    /// otherwise this fails with [`VbaError::UndeclaredParam`]. The value
    /// is not checked against the declared type; a caller that declared
    /// the type is trusted to assign a matching value.
    pub fn assign(&mut self, name: &str, value: impl Into<Value>) -> Result<(), VbaError> {
        let key = self.key(name);
        let Some(param) = self.params.get_mut(&key) else {
            return Err(VbaError::UndeclaredParam {
                name: name.to_string(),
                scope: self.current_scope.clone(),
            });
        };
        let value = value.into();
        let repr = value.repr();
        param.value = Some(value);
        self.write_line(&format!("{name} = {repr}"))
    }

    /// Declare a parameter with an inferred VBA type and assign it in one
    /// step, emitting both lines.
    ///
    /// Inference maps `Bool` to `Boolean`, `Double` to `Double`, `Str` to
    /// `String`, and `Int` to `Integer` provided the value fits VBA's
    /// 16-bit `Integer`; an out-of-range integer is rejected before
    /// anything is emitted.
    pub fn define(&mut self, name: &str, value: impl Into<Value>) -> Result<(), VbaError> {
        let value = value.into();
        let ty = match &value {
            Value::Bool(_) => VbaType::Boolean,
            Value::Int(n) => {
                if i16::try_from(*n).is_err() {
                    return Err(VbaError::IntegerOutOfRange(*n));
                }
                VbaType::Integer
            }
            Value::Double(_) => VbaType::Double,
            Value::Str(_) => VbaType::String,
        };
        self.define_as(name, value, ty)
    }

    /// Declare a parameter with an explicit VBA type and assign it in one
    /// step.
    pub fn define_as(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        ty: VbaType,
    ) -> Result<(), VbaError> {
        let value = value.into();
        self.write_line(&format!("Dim {name} As {ty}"))?;
        let repr = value.repr();
        self.params.insert(
            self.key(name),
            Param {
                ty,
                value: Some(value),
            },
        );
        self.write_line(&format!("{name} = {repr}"))
    }

    /// Value last assigned to `name` in the current scope, if any.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.params.get(&self.key(name))?.value.as_ref()
    }

    /// Declared type of `name` in the current scope, if any.
    pub fn parameter_type(&self, name: &str) -> Option<&VbaType> {
        self.params.get(&self.key(name)).map(|p| &p.ty)
    }

    /// Whether `name` is declared in the current scope.
    pub fn is_declared(&self, name: &str) -> bool {
        self.params.contains_key(&self.key(name))
    }

    /// Flush the sink and hand it back.
    pub fn finish(mut self) -> Result<W, VbaError> {
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn key(&self, name: &str) -> (String, Option<String>) {
        (name.to_string(), self.current_scope.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(writer: VbaWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn member_lines_are_indented_one_tab_inside_a_block() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.begin_with("Box").unwrap();
        w.write_line(".Name \"myBox\"").unwrap();
        w.end_with().unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\nWith Box\n\t.Name \"myBox\"\nEnd With\n"
        );
    }

    #[test]
    fn matched_blocks_return_to_depth_zero() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.begin_with("A").unwrap();
        w.begin_with("B").unwrap();
        w.end_with().unwrap();
        w.begin_with("C").unwrap();
        w.end_with().unwrap();
        w.end_with().unwrap();
        assert_eq!(w.depth(), 0);
    }

    #[test]
    fn end_with_at_depth_zero_fails_and_emits_nothing() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        assert!(matches!(w.end_with(), Err(VbaError::UnbalancedBlock)));
        assert_eq!(text(w), "Option Explicit\n");
    }

    #[test]
    fn assign_requires_prior_declaration() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        assert!(matches!(
            w.assign("radius", 2.0),
            Err(VbaError::UndeclaredParam { .. })
        ));
        w.declare("radius", VbaType::Double).unwrap();
        w.assign("radius", 2.0).unwrap();
        assert_eq!(w.parameter("radius"), Some(&Value::Double(2.0)));
    }

    #[test]
    fn scopes_keep_independent_parameter_records() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.define("x", 1.0).unwrap();
        w.begin_main().unwrap();
        // Global `x` is invisible inside Main until re-declared there.
        assert!(matches!(
            w.assign("x", 9.0),
            Err(VbaError::UndeclaredParam { .. })
        ));
        w.define("x", 2.0).unwrap();
        w.assign("x", 3.0).unwrap();
        assert_eq!(w.parameter("x"), Some(&Value::Double(3.0)));
        w.end_main().unwrap();
        assert_eq!(w.parameter("x"), Some(&Value::Double(1.0)));
    }

    #[test]
    fn define_infers_integer_and_emits_two_lines() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.define("n", 100).unwrap();
        assert_eq!(text(w), "Option Explicit\nDim n As Integer\nn = 100\n");
    }

    #[test]
    fn define_rejects_integers_beyond_16_bits() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        assert!(matches!(
            w.define("n", 40_000),
            Err(VbaError::IntegerOutOfRange(40_000))
        ));
        assert!(matches!(
            w.define("m", -40_000),
            Err(VbaError::IntegerOutOfRange(-40_000))
        ));
        assert!(!w.is_declared("n"));
        assert_eq!(text(w), "Option Explicit\n");
    }

    #[test]
    fn define_as_keeps_the_callers_type() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.define_as("count", 3, VbaType::Custom("Long".to_string()))
            .unwrap();
        assert_eq!(text(w), "Option Explicit\nDim count As Long\ncount = 3\n");
    }

    #[test]
    fn redeclaring_overwrites_the_record() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.define("x", 1.0).unwrap();
        w.declare("x", VbaType::String).unwrap();
        assert_eq!(w.parameter("x"), None);
        assert_eq!(w.parameter_type("x"), Some(&VbaType::String));
    }

    #[test]
    fn end_main_without_begin_main_fails() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        assert!(matches!(w.end_main(), Err(VbaError::MainNotEntered)));
    }

    #[test]
    fn with_main_emits_entry_and_save_trailer() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.with_main(|w| w.write_line("FileNew")).unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\nSub Main ()\n\tFileNew\n\tSave\nEnd Sub\n"
        );
    }

    #[test]
    fn with_main_restores_state_when_the_closure_fails() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        let result = w.with_main(|w| {
            w.begin_with("Boundary")?;
            Err(VbaError::UnbalancedBlock)
        });
        assert!(result.is_err());
        assert_eq!(w.depth(), 0);
        // Scope is back to global: a Main-scope declaration is gone.
        assert!(matches!(w.end_main(), Err(VbaError::MainNotEntered)));
    }

    #[test]
    fn string_parameters_render_quoted() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        w.define("label", "say \"hi\"").unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\nDim label As String\nlabel = \"say \"\"hi\"\"\"\n"
        );
    }
}
