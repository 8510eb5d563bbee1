use std::borrow::Cow;

use tracing::warn;

use crate::flags::{FormatFlags, MethodFlags, UnitFlags};
use crate::parser::*;
use crate::renderer::sink::QualifierSink;
use crate::renderer::traits::*;

const ANONYMOUS: &str = "<anonymous>";

/// Helper for rendering class names, including anonymous ones
pub struct TypeNameRenderer;

impl TypeNameRenderer {
    pub fn display_name<'e>(&self, name: &'e str, supertype: Option<&'e Lookup<String>>) -> Cow<'e, str> {
        if !name.is_empty() {
            return Cow::Borrowed(name);
        }

        match supertype {
            Some(Lookup::Found(supertype)) if !supertype.is_empty() => {
                Cow::Owned(format!("<anonymous {}>", supertype))
            }
            Some(Lookup::Failed { error }) => {
                warn!(error = error.as_str(), "could not resolve supertype of anonymous class");
                Cow::Borrowed(ANONYMOUS)
            }
            _ => Cow::Borrowed(ANONYMOUS),
        }
    }

    /// `<K, V>`, or nothing for an empty list.
    pub fn render_type_parameters(&self, params: &[String], context: &LabelContext<'_>) -> String {
        if params.is_empty() {
            return String::new();
        }
        format!("<{}>", params.join(&context.separators.comma))
    }
}

/// Helper for the parts of invocable labels that follow the parameter list
pub struct SignatureRenderer;

impl SignatureRenderer {
    pub fn render_exceptions(&self, signature: &Signature, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        if !context.flags.method.exceptions || signature.exceptions.is_empty() {
            return;
        }
        sink.plain(" throws ");
        sink.plain(&signature.exceptions.join(&context.separators.comma));
    }

    pub fn render_appended_type_parameters(
        &self,
        signature: &Signature,
        context: &LabelContext<'_>,
        sink: &mut dyn LabelSink,
    ) {
        if !context.flags.method.app_type_parameters || signature.type_parameters.is_empty() {
            return;
        }
        sink.plain(" ");
        sink.plain(&TypeNameRenderer.render_type_parameters(&signature.type_parameters, context));
    }

    pub fn render_prepended_type_parameters(
        &self,
        signature: &Signature,
        context: &LabelContext<'_>,
        sink: &mut dyn LabelSink,
    ) {
        if !context.flags.method.pre_type_parameters || signature.type_parameters.is_empty() {
            return;
        }
        sink.plain(&TypeNameRenderer.render_type_parameters(&signature.type_parameters, context));
        sink.plain(" ");
    }

    pub fn render_pre_return_type(&self, return_type: Option<&str>, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        if let (true, Some(return_type)) = (context.flags.method.pre_return_type, return_type) {
            sink.plain(return_type);
            sink.plain(" ");
        }
    }

    pub fn render_appended_return_type(
        &self,
        return_type: Option<&str>,
        context: &LabelContext<'_>,
        sink: &mut dyn LabelSink,
    ) {
        if let (true, Some(return_type)) = (context.flags.method.app_return_type, return_type) {
            sink.plain(&context.separators.declaration);
            sink.plain(return_type);
        }
    }
}

/// Parameter columns after reconciling types against names.
struct Columns<'e> {
    types: Option<Vec<Option<&'e str>>>,
    names: Option<Vec<Option<&'e str>>>,
}

impl Columns<'_> {
    fn len(&self) -> usize {
        match (&self.types, &self.names) {
            (Some(types), _) => types.len(),
            (None, Some(names)) => names.len(),
            (None, None) => 0,
        }
    }
}

/// Renders `(int index, String name)` style parameter lists
pub struct ParameterListComposer;

impl ParameterListComposer {
    pub fn compose(&self, signature: &Signature, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let flags = context.flags.method;
        let separators = context.separators;

        sink.plain("(");

        if !flags.parameter_types && !flags.parameter_names {
            if !signature.parameters.is_empty() {
                sink.plain(&separators.ellipsis);
            }
            sink.plain(")");
            return;
        }

        let columns = self.columns(&signature.parameters, flags);
        let count = columns.len();

        for i in 0..count {
            if i > 0 {
                sink.plain(&separators.comma);
            }

            let mut wrote_type = false;
            if let Some(types) = &columns.types {
                if let Some(type_name) = types[i] {
                    if signature.is_variadic && i == count - 1 {
                        sink.plain(variadic_element(type_name));
                        sink.plain(&separators.ellipsis);
                    } else {
                        sink.plain(type_name);
                    }
                    wrote_type = true;
                }
            }

            if let Some(names) = &columns.names {
                if let Some(name) = names[i] {
                    if wrote_type {
                        sink.plain(" ");
                    }
                    sink.plain(name);
                }
            }
        }

        sink.plain(")");
    }

    fn columns<'e>(&self, parameters: &'e ParameterList, flags: MethodFlags) -> Columns<'e> {
        match parameters {
            ParameterList::Paired(params) => Columns {
                types: flags
                    .parameter_types
                    .then(|| params.iter().map(|p| p.type_name.as_deref()).collect()),
                names: flags
                    .parameter_names
                    .then(|| params.iter().map(|p| p.name.as_deref()).collect()),
            },
            ParameterList::Split { types, names } => {
                let mut types: Option<Vec<Option<&str>>> = flags
                    .parameter_types
                    .then(|| types.iter().map(|t| Some(t.as_str())).collect());

                // No name array at all leaves the types alone; a failed query reads as no names
                let mut names: Option<Vec<Option<&str>>> = match (flags.parameter_names, names) {
                    (false, _) | (true, None) => None,
                    (true, Some(Lookup::Found(names))) => Some(names.iter().map(|n| Some(n.as_str())).collect()),
                    (true, Some(Lookup::Failed { error })) => {
                        warn!(error = error.as_str(), "could not read parameter names");
                        Some(Vec::new())
                    }
                };

                let lengths = types.as_ref().zip(names.as_ref()).map(|(t, n)| (t.len(), n.len()));
                match lengths {
                    // Extra leading types are synthetic parameters the names never list
                    Some((type_count, name_count)) if type_count > name_count => {
                        if let Some(type_column) = types.as_mut() {
                            type_column.drain(..type_count - name_count);
                        }
                    }
                    Some((type_count, name_count)) if type_count < name_count => names = None,
                    _ => {}
                }

                Columns { types, names }
            }
        }
    }
}

/// `String[]` and `List<String>` both become `String` before the ellipsis.
fn variadic_element(type_name: &str) -> &str {
    if let Some(element) = type_name.strip_suffix("[]") {
        return element;
    }
    type_name
        .strip_prefix("List<")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(type_name)
}

/// What a qualifier names. Every variant is rendered without further qualification
/// except through the fixed flag sets below, so owner labels never nest deeper.
#[derive(Debug, Clone, Copy)]
pub enum Owner<'e> {
    Type(&'e TypeRef),
    Unit(&'e CompilationUnit),
    /// A compilation unit shown together with its library.
    QualifiedUnit(&'e CompilationUnit),
    Library(&'e str),
    Member(&'e str),
    Method(&'e Method),
}

impl<'e> Owner<'e> {
    /// The declaring type, falling back to the file a member lives in.
    pub fn of_member(declaring_type: Option<&'e TypeRef>, unit: Option<&'e CompilationUnit>) -> Option<Self> {
        declaring_type.map(Owner::Type).or_else(|| unit.map(Owner::Unit))
    }
}

// Owner of a local variable: `Widget.build(BuildContext)`
const METHOD_OWNER_FLAGS: FormatFlags = FormatFlags {
    method: MethodFlags {
        parameter_types: true,
        fully_qualified: true,
        ..MethodFlags::NONE
    },
    ..FormatFlags::SHOW_BASICS
};

const QUALIFIED_UNIT_FLAGS: FormatFlags = FormatFlags {
    unit: UnitFlags {
        qualified: true,
        post_qualified: false,
    },
    ..FormatFlags::SHOW_BASICS
};

/// Renders owner prefixes (`Foo.bar`) and suffixes (`bar - Foo`)
pub struct QualifierComposer;

impl QualifierComposer {
    pub fn prefix(&self, owner: Owner<'_>, joiner: &str, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let mut sink = QualifierSink::new(sink);
        self.owner_label(owner, context, &mut sink);
        sink.plain(joiner);
    }

    pub fn suffix(&self, owner: Owner<'_>, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let mut sink = QualifierSink::new(sink);
        sink.plain(&context.separators.concat);
        self.owner_label(owner, context, &mut sink);
    }

    fn owner_label(&self, owner: Owner<'_>, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        match owner {
            Owner::Type(ty) => {
                let name = TypeNameRenderer.display_name(&ty.name, ty.supertype.as_ref());
                sink.plain(&name);
            }
            Owner::Unit(unit) => unit.write_label(&context.with_flags(FormatFlags::SHOW_BASICS), sink),
            Owner::QualifiedUnit(unit) => unit.write_label(&context.with_flags(QUALIFIED_UNIT_FLAGS), sink),
            Owner::Library(name) | Owner::Member(name) => sink.plain(name),
            Owner::Method(method) => method.write_label(&context.with_flags(METHOD_OWNER_FLAGS), sink),
        }
    }
}
