//! Named templates and their helpers.
//!
//! Templates see descriptors as JSON and reach the token formatter only
//! through the helpers registered in [`TemplateSet::new`]:
//!
//! - `{{paramlist fields add_type=true ignore="ID,Name"}}`
//! - `{{returnlist fields ignore="ID"}}`
//! - `{{retype field}}`
//! - `{{reniltype field}}`

use std::path::{Path, PathBuf};

use eyre::Result;
use handlebars::{Handlebars, JsonValue, handlebars_helper, no_escape};
use serde::Serialize;
use tracing::debug;
use xosauce_core::{EditableKind, TemplateKind};
use xosauce_ir::FieldDescriptor;

use crate::{
    RunError,
    format::{format_nil_equivalent, format_param_list, format_return_list, format_type},
};

/// Extension of user-supplied template files.
pub const TEMPLATE_EXTENSION: &str = ".go.hbs";

const BUILTIN: &[(&str, &str)] = &[
    (
        "xosauce_struct",
        include_str!("../templates/xosauce_struct.go.hbs"),
    ),
    ("xosauce_func", include_str!("../templates/xosauce_func.go.hbs")),
    (
        "xosauce_package_editable",
        include_str!("../templates/xosauce_package_editable.go.hbs"),
    ),
    (
        "xosauce_package_generated",
        include_str!("../templates/xosauce_package_generated.go.hbs"),
    ),
];

/// Run-level values available to the header templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderContext {
    /// Package of the regenerated files (basename of the output path).
    pub package: String,
    /// Output path.
    pub path: PathBuf,
    /// Directory the external generator wrote into.
    pub generator_dir: PathBuf,
    /// Package of the generator output (basename of `generator_dir`).
    pub generator_package: String,
}

/// The set of named templates used for one run.
pub struct TemplateSet {
    registry: Handlebars<'static>,
    overridden: Vec<String>,
}

impl TemplateSet {
    /// Built-in templates, each replaced by `<dir>/<name>.go.hbs` when present.
    pub fn new(template_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        register_helpers(&mut registry);

        let mut overridden = Vec::new();
        for (name, builtin) in BUILTIN {
            let user = template_dir
                .map(|dir| dir.join(format!("{name}{TEMPLATE_EXTENSION}")))
                .filter(|path| path.is_file());

            let source = match user {
                Some(path) => {
                    debug!(template = name, path = %path.display(), "using user template");
                    overridden.push(name.to_string());
                    std::fs::read_to_string(&path).map_err(|source| RunError::Io {
                        action: "failed to read template",
                        path,
                        source,
                    })?
                }
                None => builtin.to_string(),
            };

            registry
                .register_template_string(name, source)
                .map_err(|source| RunError::TemplateSyntax {
                    name: name.to_string(),
                    source: Box::new(source),
                })?;
        }

        Ok(Self {
            registry,
            overridden,
        })
    }

    /// Built-in templates only.
    pub fn builtin() -> Result<Self> {
        Self::new(None)
    }

    /// Names of templates replaced from the user template directory.
    pub fn overridden(&self) -> &[String] {
        &self.overridden
    }

    /// Render a named template against any serializable data.
    pub fn render(&self, name: &str, data: &impl Serialize) -> Result<String> {
        self.registry.render(name, data).map_err(|source| {
            RunError::Template {
                name: name.to_string(),
                source: Box::new(source),
            }
            .into()
        })
    }

    /// Render the per-descriptor template of `kind`.
    pub fn render_descriptor(&self, kind: TemplateKind, data: &impl Serialize) -> Result<String> {
        self.render(kind.name(), data)
    }

    /// Render the header injected into a newly created file of `kind`.
    pub fn render_header(&self, kind: EditableKind, ctx: &HeaderContext) -> Result<String> {
        self.render(kind.header_template(), ctx)
    }
}

fn register_helpers(registry: &mut Handlebars<'static>) {
    registry.register_helper("paramlist", Box::new(paramlist));
    registry.register_helper("returnlist", Box::new(returnlist));
    registry.register_helper("retype", Box::new(retype));
    registry.register_helper("reniltype", Box::new(reniltype));
}

handlebars_helper!(paramlist: |fields: array, {add_type: bool = false, ignore: str = ""}|
    format_param_list(&to_fields(fields), add_type, &ignore_list(ignore))
);

handlebars_helper!(returnlist: |fields: array, {ignore: str = ""}|
    format_return_list(&to_fields(fields), &ignore_list(ignore))
);

handlebars_helper!(retype: |field: Json| format_type(&to_field(field)));

handlebars_helper!(reniltype: |field: Json| format_nil_equivalent(&to_field(field)).to_string());

fn to_field(value: &JsonValue) -> FieldDescriptor {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn to_fields(values: &[JsonValue]) -> Vec<FieldDescriptor> {
    values.iter().map(to_field).collect()
}

fn ignore_list(ignore: &str) -> Vec<&str> {
    ignore
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;
    use xosauce_ir::FunctionDescriptor;

    use super::*;

    fn render_inline(template: &str, data: &JsonValue) -> String {
        let mut set = TemplateSet::builtin().unwrap();
        set.registry
            .register_template_string("inline", template)
            .unwrap();
        set.render("inline", data).unwrap()
    }

    #[test]
    fn test_paramlist_helper() {
        let data = json!({
            "fields": [
                { "name": "ID", "type": "int" },
                { "name": "Name", "type": "string" },
            ]
        });
        assert_eq!(
            render_inline("{{paramlist fields add_type=true}}", &data),
            "id int, name string"
        );
        assert_eq!(render_inline("{{paramlist fields}}", &data), "id, name");
        assert_eq!(
            render_inline(r#"{{paramlist fields add_type=true ignore="ID"}}"#, &data),
            "name string"
        );
    }

    #[test]
    fn test_returnlist_helper() {
        let data = json!({
            "fields": [
                { "name": "ID", "type": "int" },
                { "name": "Name", "type": "string" },
            ]
        });
        assert_eq!(render_inline("{{returnlist fields}}", &data), "int, string");
        assert_eq!(
            render_inline(r#"{{returnlist fields ignore="ID, Name"}}"#, &data),
            ""
        );
    }

    #[test]
    fn test_retype_and_reniltype_helpers() {
        let data = serde_json::to_value(FieldDescriptor::slice("User", true)).unwrap();
        let data = json!({ "ret": data });
        assert_eq!(
            render_inline("{{retype ret}} {{reniltype ret}}", &data),
            "[]*User nil"
        );
    }

    #[test]
    fn test_output_is_not_html_escaped() {
        let data = json!({ "t": "map[string]<-chan \"x\"" });
        assert_eq!(render_inline("{{t}}", &data), "map[string]<-chan \"x\"");
    }

    #[test]
    fn test_func_template_for_pointer_return() {
        let func = FunctionDescriptor::new("xo", "GetUser")
            .param(FieldDescriptor::new("db", "xo.XODB"))
            .param(FieldDescriptor::new("id", "int"))
            .returns(FieldDescriptor::pointer("User"));
        let out = TemplateSet::builtin()
            .unwrap()
            .render_descriptor(TemplateKind::Func, &func)
            .unwrap();

        insta::assert_snapshot!(out.trim_end(), @r"
        // GetUser calls xo.GetUser and wraps its result.
        func GetUser(db xo.XODB, id int) (*User, error) {
        	res, err := xo.GetUser(db, id)
        	if err != nil {
        		return nil, err
        	}
        	return &User{ User: res }, nil
        }
        ");
    }

    #[test]
    fn test_func_template_for_slice_return() {
        let func = FunctionDescriptor::new("xo", "UsersByName")
            .param(FieldDescriptor::new("db", "xo.XODB"))
            .returns(FieldDescriptor::slice("User", true));
        let out = TemplateSet::builtin()
            .unwrap()
            .render_descriptor(TemplateKind::Func, &func)
            .unwrap();

        insta::assert_snapshot!(out.trim_end(), @r"
        // UsersByName calls xo.UsersByName and wraps its result.
        func UsersByName(db xo.XODB) ([]*User, error) {
        	res, err := xo.UsersByName(db)
        	if err != nil {
        		return nil, err
        	}
        	out := make([]*User, len(res))
        	for i, r := range res {
        		out[i] = &User{ User: r }
        	}
        	return out, nil
        }
        ");
    }

    #[test]
    fn test_func_template_without_return_is_blank() {
        let func = FunctionDescriptor::new("xo", "Ping").param(FieldDescriptor::new("db", "xo.XODB"));
        let out = TemplateSet::builtin()
            .unwrap()
            .render_descriptor(TemplateKind::Func, &func)
            .unwrap();
        assert!(out.trim().is_empty());
    }

    #[test]
    fn test_struct_template() {
        let record = xosauce_ir::RecordDescriptor::new("xo", "User");
        let out = TemplateSet::builtin()
            .unwrap()
            .render_descriptor(TemplateKind::Struct, &record)
            .unwrap();
        insta::assert_snapshot!(out.trim_end(), @r"
        // User wraps xo.User.
        type User struct {
        	*xo.User
        }
        ");
    }

    #[test]
    fn test_headers() {
        let set = TemplateSet::builtin().unwrap();
        let ctx = HeaderContext {
            package: "models".to_string(),
            generator_package: "xo".to_string(),
            ..HeaderContext::default()
        };

        let generated = set.render_header(EditableKind::Generated, &ctx).unwrap();
        assert!(generated.starts_with("// Code generated by xo-sauce. DO NOT EDIT."));
        assert!(generated.contains("package models\n"));

        let editable = set.render_header(EditableKind::Editable, &ctx).unwrap();
        assert!(!editable.contains("DO NOT EDIT"));
        assert!(editable.contains("package models\n"));
    }

    #[test]
    fn test_user_template_overrides_builtin() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("xosauce_struct.go.hbs"),
            "type {{name}} = {{package}}.{{name}}\n",
        )
        .unwrap();

        let set = TemplateSet::new(Some(temp.path())).unwrap();
        assert_eq!(set.overridden(), ["xosauce_struct".to_string()]);

        let out = set
            .render_descriptor(
                TemplateKind::Struct,
                &xosauce_ir::RecordDescriptor::new("xo", "User"),
            )
            .unwrap();
        assert_eq!(out, "type User = xo.User\n");
    }

    #[test]
    fn test_broken_user_template_is_reported() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("xosauce_func.go.hbs"), "{{#if name}}").unwrap();

        let err = TemplateSet::new(Some(temp.path())).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<RunError>(),
            Some(RunError::TemplateSyntax { name, .. }) if name == "xosauce_func"
        ));
    }
}
