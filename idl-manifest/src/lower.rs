//! Lowering of the serialized layout into the package model.

use std::collections::HashMap;

use idlpack_core::{normalize_path, strip_extension};
use idlpack_ir::{
    Alias, Const, Enum, File, Member, Package, Position, Resource, Struct, StructType,
};

use crate::{
    Result,
    error::SourceContext,
    schema::{MemberSchema, Schema},
};

/// Build a [`Package`] from a parsed schema, checking the structural rules
/// the emitter relies on.
pub(crate) fn lower(schema: Schema, ctx: &SourceContext<'_>) -> Result<Package> {
    let name = schema.package.name.trim();
    if name.is_empty() {
        return Err(ctx.validation_error("package name must not be empty", None));
    }
    if let Some(problem) = schema.codegen.problem() {
        return Err(ctx.validation_error(problem, Some("[codegen]")));
    }

    let path = schema.package.path.unwrap_or_else(|| name.to_string());
    let mut package = Package::new(name, path);
    package.types = schema.types;
    package.dependencies = schema.dependencies;

    // member name -> declaring file
    let mut seen: HashMap<String, String> = HashMap::new();
    // output path without extension -> source file
    let mut outputs: HashMap<String, String> = HashMap::new();

    for file in schema.files {
        let Some(normalized) = normalize_path(&file.path) else {
            return Err(ctx.validation_error(
                format!(
                    "file path '{}' must be relative and stay inside the package root",
                    file.path
                ),
                Some(&file.path),
            ));
        };
        let stem = strip_extension(&normalized).to_string();
        if let Some(first) = outputs.get(&stem) {
            if *first == file.path {
                return Err(ctx.duplicate_file(&file.path));
            }
            return Err(ctx.validation_error(
                format!(
                    "files '{}' and '{}' would generate the same output file",
                    first, file.path
                ),
                Some(&file.path),
            ));
        }
        outputs.insert(stem, file.path.clone());

        let mut lowered = File::new(normalized.clone());
        for member in file.members {
            if let Some(first) = seen.get(member.name()) {
                return Err(ctx.duplicate_member(member.name(), first, &file.path));
            }
            seen.insert(member.name().to_string(), file.path.clone());
            lowered.push(lower_member(member, &normalized));
        }
        package.insert_file(lowered);
    }

    Ok(package)
}

fn lower_member(member: MemberSchema, file: &str) -> Member {
    let pos = Position::new(file, member.line().unwrap_or(1));
    match member {
        MemberSchema::Alias { name, target, .. } => Member::Alias(Alias { name, pos, target }),
        MemberSchema::Const {
            name, ty, value, ..
        } => Member::Const(Const {
            name,
            pos,
            ty,
            value,
        }),
        MemberSchema::Enum { name, values, .. } => Member::Enum(Enum { name, pos, values }),
        MemberSchema::Struct {
            name,
            fields,
            options,
            ..
        } => Member::Struct(Struct {
            name,
            pos,
            ty: StructType::new(fields),
            options,
        }),
        MemberSchema::Resource {
            name,
            fields,
            options,
            ..
        } => Member::Resource(Resource {
            name,
            pos,
            ty: StructType::new(fields),
            options,
        }),
    }
}
