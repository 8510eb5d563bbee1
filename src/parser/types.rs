use serde::Deserialize;

/// An attribute the element's backing model had to compute, which may have failed.
///
/// Snapshots record a failed query as `{"error": "..."}`; anything else is the
/// value itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Failed { error: String },
}

impl<T> Lookup<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub type_name: Option<String>,
    pub name: Option<String>,
}

impl Parameter {
    pub fn new(type_name: &str, name: &str) -> Self {
        Self {
            type_name: Some(type_name.to_string()),
            name: Some(name.to_string()),
        }
    }

    pub fn typed(type_name: &str) -> Self {
        Self {
            type_name: Some(type_name.to_string()),
            name: None,
        }
    }
}

/// Parameters as the model hands them out.
///
/// `Split` is the shape where type names and parameter names come from two
/// separate queries and may disagree in length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterList {
    Paired(Vec<Parameter>),
    Split {
        types: Vec<String>,
        #[serde(default)]
        names: Option<Lookup<Vec<String>>>,
    },
}

impl Default for ParameterList {
    fn default() -> Self {
        ParameterList::Paired(Vec::new())
    }
}

impl ParameterList {
    pub fn split(types: &[&str], names: &[&str]) -> Self {
        ParameterList::Split {
            types: types.iter().map(|t| t.to_string()).collect(),
            names: Some(Lookup::Found(names.iter().map(|n| n.to_string()).collect())),
        }
    }

    /// Number of parameters, counted from the type names.
    pub fn len(&self) -> usize {
        match self {
            ParameterList::Paired(params) => params.len(),
            ParameterList::Split { types, .. } => types.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything invocable elements (methods, constructors, functions) share.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Signature {
    pub parameters: ParameterList,
    pub is_variadic: bool,
    pub exceptions: Vec<String>,
    pub type_parameters: Vec<String>,
}

/// Owning type of a member. Only what a qualifier needs to print.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypeRef {
    pub name: String,
    pub supertype: Option<Lookup<String>>,
}

impl TypeRef {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            supertype: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompilationUnit {
    pub name: String,
    pub library: Option<String>,
}

impl CompilationUnit {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            library: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Method {
    pub name: String,
    pub declaring_type: Option<TypeRef>,
    pub unit: Option<CompilationUnit>,
    pub return_type: Option<String>,
    pub is_getter: bool,
    /// Carried for callers choosing decorations; labels do not depend on it.
    pub is_static: bool,
    #[serde(flatten)]
    pub signature: Signature,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Constructor {
    /// The explicit constructor name (`Point.origin` has `origin`), empty for the unnamed one.
    pub name: String,
    pub declaring_type: Option<TypeRef>,
    pub unit: Option<CompilationUnit>,
    #[serde(flatten)]
    pub signature: Signature,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Function {
    pub name: String,
    pub return_type: Option<String>,
    pub unit: Option<CompilationUnit>,
    #[serde(flatten)]
    pub signature: Signature,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    pub type_name: Option<String>,
    pub declaring_type: Option<TypeRef>,
    pub unit: Option<CompilationUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalVariable {
    pub name: String,
    pub type_name: Option<String>,
    pub parent: Option<Method>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Class {
    pub name: String,
    pub supertype: Option<Lookup<String>>,
    pub type_parameters: Vec<String>,
    /// For anonymous classes, the label of the method or field they are declared in.
    pub enclosing_member: Option<String>,
    pub unit: Option<CompilationUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportContainer {
    pub unit: Option<CompilationUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Library {
    pub name: String,
    pub display_name: Option<String>,
}

/// An element of a kind this crate has no renderer for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherElement {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Method(Method),
    Constructor(Constructor),
    Field(Field),
    Function(Function),
    LocalVariable(LocalVariable),
    Class(Class),
    CompilationUnit(CompilationUnit),
    ImportContainer(ImportContainer),
    Project(Project),
    Library(Library),
    #[serde(skip_deserializing)]
    Other(OtherElement),
}

/// Kind tags accepted in element snapshots.
pub const KNOWN_KINDS: &[&str] = &[
    "method",
    "constructor",
    "field",
    "function",
    "local_variable",
    "class",
    "compilation_unit",
    "import_container",
    "project",
    "library",
];

impl Element {
    /// The element's own name, before any label composition.
    pub fn name(&self) -> &str {
        match self {
            Element::Method(m) => &m.name,
            Element::Constructor(c) => &c.name,
            Element::Field(f) => &f.name,
            Element::Function(f) => &f.name,
            Element::LocalVariable(v) => &v.name,
            Element::Class(c) => &c.name,
            Element::CompilationUnit(u) => &u.name,
            Element::ImportContainer(_) => "",
            Element::Project(p) => &p.name,
            Element::Library(l) => &l.name,
            Element::Other(o) => &o.name,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Element::Method(_) => "method",
            Element::Constructor(_) => "constructor",
            Element::Field(_) => "field",
            Element::Function(_) => "function",
            Element::LocalVariable(_) => "local_variable",
            Element::Class(_) => "class",
            Element::CompilationUnit(_) => "compilation_unit",
            Element::ImportContainer(_) => "import_container",
            Element::Project(_) => "project",
            Element::Library(_) => "library",
            Element::Other(o) => &o.kind,
        }
    }
}
