//! Extraction from Go source units.

use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Tree};
use xosauce_ir::{FieldDescriptor, FunctionDescriptor, RecordDescriptor};

use crate::{
    Error, Extracted, Result, ShapeRole, ShapeWarning, SourceUnit, StructuralExtractor,
    UnitDescriptors,
};

/// Bare identifiers that are conventionally unqualified in their own
/// declaring package and get qualified with it.
pub const DEFAULT_MARKER_TYPES: &[&str] = &["XODB"];

const DIALECT: &str = "go";

/// Tree-sitter backed extractor for Go units.
#[derive(Debug, Clone)]
pub struct GoExtractor {
    marker_types: Vec<String>,
}

impl Default for GoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralExtractor for GoExtractor {
    fn dialect(&self) -> &'static str {
        DIALECT
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn extract(&self, unit: &SourceUnit) -> Result<UnitDescriptors> {
        let parsed = self.parse(unit)?;
        let records = parsed.records();
        let functions = parsed.functions(&self.marker_types);
        debug!(
            file = %parsed.file,
            package = %parsed.package,
            records = records.len(),
            functions = functions.value.len(),
            "extracted unit"
        );

        Ok(UnitDescriptors {
            package: parsed.package,
            records,
            functions: functions.value,
            warnings: functions.warnings,
        })
    }
}

impl GoExtractor {
    /// Extractor with the default marker types.
    pub fn new() -> Self {
        Self::with_marker_types(DEFAULT_MARKER_TYPES.iter().copied())
    }

    /// Extractor qualifying the given bare identifiers with the unit's package.
    pub fn with_marker_types<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            marker_types: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn marker_types(&self) -> &[String] {
        &self.marker_types
    }

    /// Record descriptors for every top-level struct type of `unit`.
    pub fn extract_records(&self, unit: &SourceUnit) -> Result<Vec<RecordDescriptor>> {
        Ok(self.parse(unit)?.records())
    }

    /// Function descriptors for every top-level receiver-less function of `unit`.
    pub fn extract_functions(
        &self,
        unit: &SourceUnit,
    ) -> Result<Extracted<Vec<FunctionDescriptor>>> {
        Ok(self.parse(unit)?.functions(&self.marker_types))
    }

    fn parse<'u>(&self, unit: &'u SourceUnit) -> Result<ParsedUnit<'u>> {
        let file = unit.file_name();
        let src = unit.source();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|source| {
                Box::new(Error::Grammar {
                    dialect: DIALECT,
                    source,
                })
            })?;
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| Box::new(Error::NoTree { file: file.clone() }))?;

        let root = tree.root_node();
        if let Some(bad) = first_error(root) {
            let message = if bad.is_missing() {
                format!("expected `{}`", bad.kind())
            } else {
                "unexpected syntax".to_string()
            };
            return Err(Error::parse(
                file,
                src,
                bad.start_byte()..bad.end_byte(),
                DIALECT,
                message,
            ));
        }

        let package = {
            let mut cursor = root.walk();
            let clause = root
                .named_children(&mut cursor)
                .find(|n| n.kind() == "package_clause");
            clause.and_then(|c| {
                let mut cursor = c.walk();
                let ident = c
                    .named_children(&mut cursor)
                    .find(|n| n.kind() == "package_identifier");
                ident.map(|n| text(n, src).to_string())
            })
        };
        let Some(package) = package else {
            return Err(Error::parse(file, src, 0..0, DIALECT, "expected `package`"));
        };

        Ok(ParsedUnit {
            tree,
            src,
            file,
            package,
        })
    }
}

struct ParsedUnit<'u> {
    tree: Tree,
    src: &'u str,
    file: String,
    package: String,
}

impl ParsedUnit<'_> {
    fn records(&self) -> Vec<RecordDescriptor> {
        let root = self.tree.root_node();
        let mut records = Vec::new();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if decl.kind() != "type_declaration" {
                continue;
            }
            let mut specs = decl.walk();
            for spec in decl.named_children(&mut specs) {
                // `type T struct{}` and `type T = struct{}` both declare a record
                if !matches!(spec.kind(), "type_spec" | "type_alias") {
                    continue;
                }
                let is_struct = spec
                    .child_by_field_name("type")
                    .is_some_and(|t| unparen(t).kind() == "struct_type");
                if let (true, Some(name)) = (is_struct, spec.child_by_field_name("name")) {
                    records.push(RecordDescriptor::new(&self.package, text(name, self.src)));
                }
            }
        }

        records
    }

    fn functions(&self, markers: &[String]) -> Extracted<Vec<FunctionDescriptor>> {
        let root = self.tree.root_node();
        let mut functions = Vec::new();
        let mut warnings = Vec::new();

        let mut cursor = root.walk();
        // method_declaration is a distinct kind, so receivers never get here
        for decl in root.named_children(&mut cursor) {
            if decl.kind() != "function_declaration" {
                continue;
            }
            let Some(name) = decl.child_by_field_name("name") else {
                continue;
            };
            let mut func = FunctionDescriptor::new(&self.package, text(name, self.src));

            if let Some(params) = decl.child_by_field_name("parameters") {
                func.params = self.params(params, &func.name, markers, &mut warnings);
            }
            if let Some(result) = decl.child_by_field_name("result") {
                func.ret = self.result(result, &func.name, &mut warnings);
            }

            functions.push(func);
        }

        Extracted::new(functions, warnings)
    }

    fn params(
        &self,
        list: Node<'_>,
        function: &str,
        markers: &[String],
        warnings: &mut Vec<ShapeWarning>,
    ) -> Vec<FieldDescriptor> {
        let mut fields = Vec::new();

        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            let Some(ty) = decl.child_by_field_name("type") else {
                continue;
            };
            let resolved = match decl.kind() {
                "parameter_declaration" => self.param_type(ty, markers),
                _ => None,
            };
            let Some(resolved) = resolved else {
                warnings.push(self.warning(ty, function, ShapeRole::Param));
                continue;
            };

            let mut names = decl.walk();
            let names: Vec<_> = decl
                .children_by_field_name("name", &mut names)
                .map(|n| text(n, self.src).to_string())
                .collect();
            if names.is_empty() {
                fields.push(FieldDescriptor::new("", resolved));
            } else {
                fields.extend(
                    names
                        .into_iter()
                        .map(|n| FieldDescriptor::new(n, resolved.clone())),
                );
            }
        }

        fields
    }

    /// Simple and package-qualified identifiers only.
    fn param_type(&self, ty: Node<'_>, markers: &[String]) -> Option<String> {
        let ty = unparen(ty);
        match ty.kind() {
            "type_identifier" => {
                let name = text(ty, self.src);
                if markers.iter().any(|m| m == name) {
                    Some(format!("{}.{}", self.package, name))
                } else {
                    Some(name.to_string())
                }
            }
            "qualified_type" => {
                let pkg = ty.child_by_field_name("package")?;
                let name = ty.child_by_field_name("name")?;
                Some(format!("{}.{}", text(pkg, self.src), text(name, self.src)))
            }
            _ => None,
        }
    }

    /// Scans results in declaration order; the last recognized one wins.
    fn result(
        &self,
        result: Node<'_>,
        function: &str,
        warnings: &mut Vec<ShapeWarning>,
    ) -> Option<FieldDescriptor> {
        let types: Vec<Node<'_>> = if result.kind() == "parameter_list" {
            let mut cursor = result.walk();
            result
                .named_children(&mut cursor)
                .filter_map(|decl| decl.child_by_field_name("type"))
                .collect()
        } else {
            vec![result]
        };

        let mut ret = None;
        for ty in types {
            match self.result_shape(ty) {
                Shape::Recognized(field) => ret = Some(field),
                Shape::Ambiguous => warnings.push(self.warning(ty, function, ShapeRole::Result)),
                Shape::Other => trace!(function, shape = text(ty, self.src), "skipping result"),
            }
        }
        ret
    }

    fn result_shape(&self, ty: Node<'_>) -> Shape {
        let ty = unparen(ty);
        match ty.kind() {
            "pointer_type" => match self.pointee(ty) {
                Some(name) => Shape::Recognized(FieldDescriptor::pointer(name)),
                None => Shape::Ambiguous,
            },
            "slice_type" | "array_type" => {
                let elem = ty.child_by_field_name("element").map(unparen);
                match elem {
                    Some(elem) if elem.kind() == "pointer_type" => match self.pointee(elem) {
                        Some(name) => Shape::Recognized(FieldDescriptor::slice(name, true)),
                        None => Shape::Ambiguous,
                    },
                    _ => Shape::Ambiguous,
                }
            }
            _ => Shape::Other,
        }
    }

    /// Name of `T` in `*T`, when `T` is a bare identifier.
    fn pointee(&self, ptr: Node<'_>) -> Option<String> {
        let mut cursor = ptr.walk();
        let inner = ptr.named_children(&mut cursor).next().map(unparen)?;
        (inner.kind() == "type_identifier").then(|| text(inner, self.src).to_string())
    }

    fn warning(&self, ty: Node<'_>, function: &str, role: ShapeRole) -> ShapeWarning {
        ShapeWarning {
            file: self.file.clone(),
            line: ty.start_position().row + 1,
            function: function.to_string(),
            role,
            shape: text(ty, self.src).to_string(),
        }
    }
}

enum Shape {
    Recognized(FieldDescriptor),
    /// A pointer or slice form the descriptor model cannot express.
    Ambiguous,
    /// Anything else (`error`, `int`, ...); dropped silently.
    Other,
}

fn text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    src.get(node.byte_range()).unwrap_or_default()
}

fn unparen(node: Node<'_>) -> Node<'_> {
    if node.kind() != "parenthesized_type" {
        return node;
    }
    let mut cursor = node.walk();
    let inner = node.named_children(&mut cursor).next();
    inner.map_or(node, unparen)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
