//! Field flattening.
//!
//! Struct and resource members may embed other structs anonymously. Their
//! property options are stored against the *leaf* fields, in the order a
//! depth-first, left-to-right walk visits them, so the walk and the options
//! cursor have to advance together.

use idlpack_ir::{Field, Package, PropertyOptions, StructType, Type, TypeMember};

use crate::{Error, Result};

/// How many alias hops to follow when resolving an embedded type.
const MAX_ALIAS_DEPTH: usize = 32;

/// A leaf field paired with its property options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatField<'a> {
    pub field: &'a Field,
    pub options: &'a PropertyOptions,
}

impl FlatField<'_> {
    /// The property name in the target language.
    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn ty(&self) -> &Type {
        &self.field.ty
    }
}

/// Visit every leaf field of `member` in flattened order, along with its
/// options. Returns the number of leaf fields visited.
///
/// Fails if an embedded field does not name a struct, or if the member's
/// options do not line up one-to-one with its leaf fields.
pub fn for_each_field<'a, F>(
    package: &'a Package,
    member: &'a dyn TypeMember,
    mut action: F,
) -> Result<usize>
where
    F: FnMut(&'a Field, &'a PropertyOptions),
{
    let options = member.property_options();
    let walker = Walker {
        package,
        member: member.name(),
    };
    let consumed = walker.walk(member.struct_type(), options, &mut action)?;
    if consumed != options.len() {
        return Err(walker.misaligned(options.len()));
    }
    Ok(consumed)
}

/// Collect the leaf fields of `member` in flattened order.
pub fn flatten_fields<'a>(
    package: &'a Package,
    member: &'a dyn TypeMember,
) -> Result<Vec<FlatField<'a>>> {
    let mut fields = Vec::with_capacity(member.property_options().len());
    for_each_field(package, member, |field, options| {
        fields.push(FlatField { field, options });
    })?;
    Ok(fields)
}

struct Walker<'a> {
    package: &'a Package,
    member: &'a str,
}

impl<'a> Walker<'a> {
    /// Walk `ty`, drawing options from the front of `options`. Returns how
    /// many were consumed.
    fn walk<F>(
        &self,
        ty: &'a StructType,
        options: &'a [PropertyOptions],
        action: &mut F,
    ) -> Result<usize>
    where
        F: FnMut(&'a Field, &'a PropertyOptions),
    {
        let mut consumed = 0;
        for field in &ty.fields {
            if field.embedded {
                let inner = self.embedded_struct(field)?;
                consumed += self.walk(inner, &options[consumed..], action)?;
            } else {
                let opts = options
                    .get(consumed)
                    .ok_or_else(|| self.misaligned(options.len()))?;
                action(field, opts);
                consumed += 1;
            }
        }
        Ok(consumed)
    }

    fn embedded_struct(&self, field: &Field) -> Result<&'a StructType> {
        let mut ty: &'a Type = match self.resolve(&field.ty) {
            Some(ty) => ty,
            None => return Err(self.not_struct(field)),
        };
        for _ in 0..MAX_ALIAS_DEPTH {
            match ty {
                Type::Struct(inner) => return Ok(inner),
                Type::Named(_) | Type::Pointer(_) => match self.resolve(ty) {
                    Some(next) => ty = next,
                    None => break,
                },
                _ => break,
            }
        }
        Err(self.not_struct(field))
    }

    /// One step towards the underlying shape of a named (or pointed-to) type.
    fn resolve(&self, ty: &Type) -> Option<&'a Type> {
        match ty {
            Type::Named(named) => self.package.underlying(named),
            Type::Pointer(elem) => self.resolve(elem),
            _ => None,
        }
    }

    fn not_struct(&self, field: &Field) -> Error {
        Error::EmbeddedNotStruct {
            member: self.member.to_string(),
            field: field.name.clone(),
        }
    }

    fn misaligned(&self, options: usize) -> Error {
        Error::OptionsMisaligned {
            member: self.member.to_string(),
            options,
        }
    }
}
