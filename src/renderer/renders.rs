use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

const IMPORT_CONTAINER_LABEL: &str = "imports";
const ANONYMOUS_FUNCTION_LABEL: &str = "function";

impl Label for Method {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let flags = context.flags.method;
        let signature_renderer = SignatureRenderer;
        let qualifiers = QualifierComposer;

        signature_renderer.render_prepended_type_parameters(&self.signature, context, sink);
        signature_renderer.render_pre_return_type(self.return_type.as_deref(), context, sink);

        if flags.fully_qualified {
            if let Some(declaring_type) = &self.declaring_type {
                qualifiers.prefix(Owner::Type(declaring_type), ".", context, sink);
            }
        }

        sink.plain(&self.name);

        // Getters read like fields: no parameter list at all
        if !self.is_getter {
            ParameterListComposer.compose(&self.signature, context, sink);
        }

        signature_renderer.render_appended_type_parameters(&self.signature, context, sink);
        signature_renderer.render_exceptions(&self.signature, context, sink);
        signature_renderer.render_appended_return_type(self.return_type.as_deref(), context, sink);

        if flags.post_qualified {
            if let Some(owner) = Owner::of_member(self.declaring_type.as_ref(), self.unit.as_ref()) {
                qualifiers.suffix(owner, context, sink);
            }
        }
    }
}

impl Label for Constructor {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let signature_renderer = SignatureRenderer;

        signature_renderer.render_prepended_type_parameters(&self.signature, context, sink);

        // `Point.origin` for named constructors, `Point` for the unnamed one
        match &self.declaring_type {
            Some(declaring_type) => {
                sink.plain(&TypeNameRenderer.display_name(&declaring_type.name, declaring_type.supertype.as_ref()));
                if !self.name.is_empty() {
                    sink.plain(".");
                    sink.plain(&self.name);
                }
            }
            None => sink.plain(&self.name),
        }

        ParameterListComposer.compose(&self.signature, context, sink);

        signature_renderer.render_appended_type_parameters(&self.signature, context, sink);
        signature_renderer.render_exceptions(&self.signature, context, sink);

        if context.flags.method.post_qualified {
            if let Some(owner) = Owner::of_member(self.declaring_type.as_ref(), self.unit.as_ref()) {
                QualifierComposer.suffix(owner, context, sink);
            }
        }
    }
}

impl Label for Function {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let signature_renderer = SignatureRenderer;

        signature_renderer.render_prepended_type_parameters(&self.signature, context, sink);
        signature_renderer.render_pre_return_type(self.return_type.as_deref(), context, sink);

        if self.name.is_empty() {
            sink.plain(ANONYMOUS_FUNCTION_LABEL);
        } else {
            sink.plain(&self.name);
        }

        ParameterListComposer.compose(&self.signature, context, sink);

        signature_renderer.render_appended_type_parameters(&self.signature, context, sink);
        signature_renderer.render_exceptions(&self.signature, context, sink);
        signature_renderer.render_appended_return_type(self.return_type.as_deref(), context, sink);

        if context.flags.method.post_qualified {
            if let Some(unit) = &self.unit {
                QualifierComposer.suffix(Owner::Unit(unit), context, sink);
            }
        }
    }
}

/// Shared by fields and local variables, which differ only in their owner.
fn write_variable_label(
    name: &str,
    type_name: Option<&str>,
    owner: Option<Owner<'_>>,
    context: &LabelContext<'_>,
    sink: &mut dyn LabelSink,
) {
    let flags = context.flags.field;
    let qualifiers = QualifierComposer;

    if let (true, Some(type_name)) = (flags.pre_type, type_name) {
        sink.plain(type_name);
        sink.plain(" ");
    }

    if let (true, Some(owner)) = (flags.fully_qualified, owner) {
        qualifiers.prefix(owner, ".", context, sink);
    }

    sink.plain(name);

    if let (true, Some(type_name)) = (flags.app_type, type_name) {
        sink.plain(&context.separators.declaration);
        sink.plain(type_name);
    }

    if let (true, Some(owner)) = (flags.post_qualified, owner) {
        qualifiers.suffix(owner, context, sink);
    }
}

impl Label for Field {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let owner = Owner::of_member(self.declaring_type.as_ref(), self.unit.as_ref());
        write_variable_label(&self.name, self.type_name.as_deref(), owner, context, sink);
    }
}

impl Label for LocalVariable {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let owner = self.parent.as_ref().map(Owner::Method);
        write_variable_label(&self.name, self.type_name.as_deref(), owner, context, sink);
    }
}

impl Label for Class {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let flags = context.flags.ty;
        let qualifiers = QualifierComposer;
        let type_renderer = TypeNameRenderer;

        if flags.fully_qualified || flags.container_qualified {
            if let (true, Some(member)) = (self.name.is_empty(), &self.enclosing_member) {
                qualifiers.prefix(Owner::Member(member), ".", context, sink);
            }
        }

        sink.plain(&type_renderer.display_name(&self.name, self.supertype.as_ref()));

        if flags.type_parameters {
            sink.plain(&type_renderer.render_type_parameters(&self.type_parameters, context));
        }

        if flags.post_qualified {
            if let Some(unit) = &self.unit {
                qualifiers.suffix(Owner::Unit(unit), context, sink);
            }
        }
    }
}

impl Label for CompilationUnit {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let flags = context.flags.unit;
        let qualifiers = QualifierComposer;

        if let (true, Some(library)) = (flags.qualified, &self.library) {
            qualifiers.prefix(Owner::Library(library), "/", context, sink);
        }

        sink.plain(&self.name);

        if let (true, Some(library)) = (flags.post_qualified, &self.library) {
            qualifiers.suffix(Owner::Library(library), context, sink);
        }
    }
}

impl Label for ImportContainer {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        let flags = context.flags.declaration;
        let qualifiers = QualifierComposer;

        if let (true, Some(unit)) = (flags.qualified, &self.unit) {
            qualifiers.prefix(Owner::QualifiedUnit(unit), "/", context, sink);
        }

        sink.plain(IMPORT_CONTAINER_LABEL);

        if let (true, Some(unit)) = (flags.post_qualified, &self.unit) {
            qualifiers.suffix(Owner::QualifiedUnit(unit), context, sink);
        }
    }
}

impl Label for Element {
    fn write_label(&self, context: &LabelContext<'_>, sink: &mut dyn LabelSink) {
        match self {
            Element::Method(method) => method.write_label(context, sink),
            Element::Constructor(constructor) => constructor.write_label(context, sink),
            Element::Function(function) => function.write_label(context, sink),
            Element::Field(field) => field.write_label(context, sink),
            Element::LocalVariable(variable) => variable.write_label(context, sink),
            Element::Class(class) => class.write_label(context, sink),
            Element::CompilationUnit(unit) => unit.write_label(context, sink),
            Element::ImportContainer(container) => container.write_label(context, sink),
            Element::Library(library) => {
                let display_name = library.display_name.as_deref().filter(|name| !name.is_empty());
                sink.plain(display_name.unwrap_or(&library.name));
            }
            Element::Project(_) | Element::Other(_) => sink.plain(self.name()),
        }
    }
}
