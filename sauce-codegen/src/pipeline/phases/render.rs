//! Render phase - one segment per descriptor.

use eyre::Result;
use tracing::debug;
use xosauce_core::TemplateKind;

use crate::{
    Segment,
    pipeline::{Phase, RunContext},
};

/// Phase that renders every record with the struct template and every
/// function with the func template.
///
/// All segments of a unit share the unit's logical name, so they land in
/// the same editable/generated file pair.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Render descriptors into segments"
    }

    fn run(&self, ctx: &mut RunContext) -> Result<()> {
        let mut segments = Vec::new();

        for unit in &ctx.extracted {
            for record in &unit.descriptors.records {
                let content = ctx.templates.render_descriptor(TemplateKind::Struct, record)?;
                segments.push(Segment::new(&unit.name, TemplateKind::Struct, &record.name, content));
            }
            for func in &unit.descriptors.functions {
                let content = ctx.templates.render_descriptor(TemplateKind::Func, func)?;
                segments.push(Segment::new(&unit.name, TemplateKind::Func, &func.name, content));
            }
            debug!(unit = %unit.file, segments = segments.len(), "rendered");
        }

        ctx.segments = segments;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use xosauce_config::Config;
    use xosauce_core::EditableKind;
    use xosauce_extract::UnitDescriptors;
    use xosauce_ir::{FieldDescriptor, FunctionDescriptor, RecordDescriptor};

    use super::*;
    use crate::{RunOptions, pipeline::ExtractedUnit};

    #[test]
    fn test_one_segment_per_descriptor() {
        let mut ctx = RunContext::new(Config::default(), RunOptions::new("db", "models")).unwrap();
        ctx.extracted = vec![ExtractedUnit {
            name: "user".to_string(),
            file: "user.xo.go".to_string(),
            descriptors: UnitDescriptors {
                package: "xo".to_string(),
                records: vec![RecordDescriptor::new("xo", "User")],
                functions: vec![
                    FunctionDescriptor::new("xo", "GetUser")
                        .param(FieldDescriptor::new("db", "xo.XODB"))
                        .returns(FieldDescriptor::pointer("User")),
                    FunctionDescriptor::new("xo", "Ping"),
                ],
                warnings: Vec::new(),
            },
        }];

        RenderPhase.run(&mut ctx).unwrap();

        let tags: Vec<_> = ctx
            .segments
            .iter()
            .map(|s| (s.name.as_str(), s.kind, s.descriptor.as_str(), s.is_blank()))
            .collect();
        assert_eq!(
            tags,
            [
                ("user", EditableKind::Editable, "User", false),
                ("user", EditableKind::Generated, "GetUser", false),
                ("user", EditableKind::Generated, "Ping", true),
            ]
        );
    }
}
