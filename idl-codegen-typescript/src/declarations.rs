//! Member-to-declaration translation.

use idlpack_codegen::{
    CodeBuilder, CodeFragment, Error, FileScope, ImportCollector, Indent, Renderable, Result,
    TypeMapper, flatten_fields,
};
use idlpack_ir::{Alias, Const, Enum, Member, MemberKind, Resource, Type, TypeMember};
use tracing::trace;

use crate::{
    TypeScriptTypeMapper,
    ast::{self, Class, Constructor, Interface, Property, TypeAlias, Union},
};

/// What the file header needs to know once the body has been emitted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileImports {
    /// References made by the emitted declarations.
    pub imports: ImportCollector,
    /// Whether a resource class was emitted.
    pub had_resource: bool,
}

/// Emits the declarations of one file.
///
/// Holds the per-file state (recorded references, whether a resource was
/// seen); create one per file and drop it when the file is done.
pub struct DeclarationEmitter<'a> {
    scope: FileScope<'a>,
    mapper: TypeScriptTypeMapper,
    runtime_alias: &'a str,
    indent: Indent,
    state: FileImports,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(scope: FileScope<'a>, runtime_alias: &'a str) -> Self {
        Self {
            scope,
            mapper: TypeScriptTypeMapper,
            runtime_alias,
            indent: Indent::default(),
            state: FileImports::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Emit `members` in order, applying the spacing rules between them.
    ///
    /// Runs of aliases and runs of consts are kept together; every other
    /// pair of neighbours is separated by a blank line. The result always
    /// ends with a blank line.
    pub fn emit_body<'m>(&mut self, members: impl IntoIterator<Item = &'m Member>) -> Result<String> {
        let mut builder = CodeBuilder::new(self.indent);
        let mut previous: Option<MemberKind> = None;

        for member in members {
            let kind = member.kind();
            if previous.is_some_and(|prev| separated(prev, kind)) {
                builder.push_blank();
            }
            for fragment in self.emit(member)? {
                builder.apply_fragment(fragment);
            }
            previous = Some(kind);
        }

        builder.push_blank();
        Ok(builder.build())
    }

    /// Emit a single member.
    pub fn emit(&mut self, member: &Member) -> Result<Vec<CodeFragment>> {
        trace!(member = member.name(), kind = %member.kind(), "emitting declaration");
        match member {
            Member::Alias(alias) => self.alias(alias),
            Member::Const(konst) => self.constant(konst),
            Member::Enum(enumeration) => self.enumeration(enumeration),
            Member::Struct(structure) => Ok(self
                .interface(&structure.name, structure)?
                .to_fragments()),
            Member::Resource(resource) => self.resource(resource),
        }
    }

    /// Hand back the per-file state.
    pub fn finish(self) -> FileImports {
        self.state
    }

    fn map(&mut self, ty: &Type) -> Result<String> {
        self.mapper
            .render_type(ty, &self.scope, &mut self.state.imports)
    }

    fn alias(&mut self, alias: &Alias) -> Result<Vec<CodeFragment>> {
        let target = self.map(&alias.target)?;
        Ok(TypeAlias::new(&alias.name, target).to_fragments())
    }

    fn constant(&mut self, konst: &Const) -> Result<Vec<CodeFragment>> {
        let ty = self.map(&konst.ty)?;
        Ok(ast::Const::new(&konst.name, ty, &konst.value).to_fragments())
    }

    fn enumeration(&mut self, enumeration: &Enum) -> Result<Vec<CodeFragment>> {
        if enumeration.values.is_empty() {
            return Err(Error::EmptyEnum {
                name: enumeration.name.clone(),
            });
        }
        Ok(Union::new(&enumeration.name)
            .variants(enumeration.values.iter().map(|v| quote(v)))
            .to_fragments())
    }

    /// The interface shape of a struct or resource: every leaf field that is
    /// not output-only.
    fn interface(&mut self, name: &str, member: &dyn TypeMember) -> Result<Interface> {
        Ok(Interface::new(name).properties(self.properties(member)?))
    }

    fn properties(&mut self, member: &dyn TypeMember) -> Result<Vec<Property>> {
        let fields = flatten_fields(self.scope.package, member)?;
        let mut properties = Vec::with_capacity(fields.len());
        for flat in fields.iter().filter(|f| !f.options.out) {
            let ty = self.map(flat.ty())?;
            properties.push(
                Property::new(flat.name(), ty)
                    .readonly_if(flat.options.replaces)
                    .optional_if(flat.options.optional),
            );
        }
        Ok(properties)
    }

    /// A resource becomes a class extending the runtime base, with a
    /// constructor that checks required arguments are present, followed by
    /// its `<Name>Args` interface.
    fn resource(&mut self, resource: &Resource) -> Result<Vec<CodeFragment>> {
        let args = format!("{}Args", resource.name);
        let properties = self.properties(resource)?;

        let mut constructor = Constructor::new().param("args", &args).line("super();");
        for property in &properties {
            let name = &property.name;
            if !property.optional {
                constructor.push(CodeFragment::block(
                    format!("if (args.{} === undefined) {{", name),
                    vec![CodeFragment::line(format!(
                        "throw new Error(\"Missing required argument '{}'\");",
                        name
                    ))],
                    Some("}".to_string()),
                ));
            }
            constructor.push(CodeFragment::line(format!("this.{} = args.{};", name, name)));
        }

        let class = Class::new(&resource.name)
            .extends(format!("{}.Resource", self.runtime_alias))
            .implements(&args)
            .properties(properties.iter().cloned())
            .constructor(constructor);

        let mut fragments = class.to_fragments();
        fragments.push(CodeFragment::Blank);
        fragments.extend(Interface::new(&args).properties(properties).to_fragments());

        self.state.had_resource = true;
        Ok(fragments)
    }
}

/// Whether a blank line goes between neighbours of these kinds.
fn separated(previous: MemberKind, next: MemberKind) -> bool {
    let stacks = matches!(next, MemberKind::Alias | MemberKind::Const);
    !(stacks && previous == next)
}

/// A string literal for an enum value.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
