//! Label formatting options.
//!
//! Options are grouped by the element category they affect. A flag set for a
//! category the rendered element does not belong to is simply ignored, so any
//! preset can be handed to any element.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::ops::{BitOr, BitOrAssign};

/// Options for methods, constructors and functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MethodFlags {
    /// `foo(int, String)`
    pub parameter_types: bool,
    /// `foo(index, name)`
    pub parameter_names: bool,
    /// `<T> foo(T)`
    pub pre_type_parameters: bool,
    /// `foo(T) <T>`
    pub app_type_parameters: bool,
    /// `foo() throws IOError`
    pub exceptions: bool,
    /// `foo() : int`
    pub app_return_type: bool,
    /// `int foo()`
    pub pre_return_type: bool,
    /// `Owner.foo()`
    pub fully_qualified: bool,
    /// `foo() - Owner`
    pub post_qualified: bool,
}

impl MethodFlags {
    pub const NONE: Self = Self {
        parameter_types: false,
        parameter_names: false,
        pre_type_parameters: false,
        app_type_parameters: false,
        exceptions: false,
        app_return_type: false,
        pre_return_type: false,
        fully_qualified: false,
        post_qualified: false,
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            parameter_types: self.parameter_types || other.parameter_types,
            parameter_names: self.parameter_names || other.parameter_names,
            pre_type_parameters: self.pre_type_parameters || other.pre_type_parameters,
            app_type_parameters: self.app_type_parameters || other.app_type_parameters,
            exceptions: self.exceptions || other.exceptions,
            app_return_type: self.app_return_type || other.app_return_type,
            pre_return_type: self.pre_return_type || other.pre_return_type,
            fully_qualified: self.fully_qualified || other.fully_qualified,
            post_qualified: self.post_qualified || other.post_qualified,
        }
    }
}

/// Options for fields and local variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldFlags {
    /// `name : int`
    pub app_type: bool,
    /// `int name`
    pub pre_type: bool,
    pub fully_qualified: bool,
    pub post_qualified: bool,
}

impl FieldFlags {
    pub const NONE: Self = Self {
        app_type: false,
        pre_type: false,
        fully_qualified: false,
        post_qualified: false,
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            app_type: self.app_type || other.app_type,
            pre_type: self.pre_type || other.pre_type,
            fully_qualified: self.fully_qualified || other.fully_qualified,
            post_qualified: self.post_qualified || other.post_qualified,
        }
    }
}

/// Options for classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypeFlags {
    pub fully_qualified: bool,
    /// Prefix anonymous classes with the member declaring them.
    pub container_qualified: bool,
    pub post_qualified: bool,
    /// `Map<K, V>`
    pub type_parameters: bool,
}

impl TypeFlags {
    pub const NONE: Self = Self {
        fully_qualified: false,
        container_qualified: false,
        post_qualified: false,
        type_parameters: false,
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            fully_qualified: self.fully_qualified || other.fully_qualified,
            container_qualified: self.container_qualified || other.container_qualified,
            post_qualified: self.post_qualified || other.post_qualified,
            type_parameters: self.type_parameters || other.type_parameters,
        }
    }
}

/// Options for declarations inside a compilation unit (the import container).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeclarationFlags {
    pub qualified: bool,
    pub post_qualified: bool,
}

impl DeclarationFlags {
    pub const NONE: Self = Self {
        qualified: false,
        post_qualified: false,
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            qualified: self.qualified || other.qualified,
            post_qualified: self.post_qualified || other.post_qualified,
        }
    }
}

/// Options for compilation units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnitFlags {
    /// `library/unit.dart`
    pub qualified: bool,
    /// `unit.dart - library`
    pub post_qualified: bool,
}

impl UnitFlags {
    pub const NONE: Self = Self {
        qualified: false,
        post_qualified: false,
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            qualified: self.qualified || other.qualified,
            post_qualified: self.post_qualified || other.post_qualified,
        }
    }
}

/// Hints for whoever picks the icon. Never change label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconFlags {
    pub small: bool,
    pub no_overlay: bool,
}

impl IconFlags {
    pub const NONE: Self = Self {
        small: false,
        no_overlay: false,
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            small: self.small || other.small,
            no_overlay: self.no_overlay || other.no_overlay,
        }
    }
}

/// The full option set handed to the composer. Immutable per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatFlags {
    pub method: MethodFlags,
    pub field: FieldFlags,
    #[serde(rename = "type")]
    pub ty: TypeFlags,
    pub declaration: DeclarationFlags,
    pub unit: UnitFlags,
    pub icons: IconFlags,
}

impl FormatFlags {
    /// No options: every element renders as its bare name.
    pub const SHOW_BASICS: Self = Self {
        method: MethodFlags::NONE,
        field: FieldFlags::NONE,
        ty: TypeFlags::NONE,
        declaration: DeclarationFlags::NONE,
        unit: UnitFlags::NONE,
        icons: IconFlags::NONE,
    };

    /// Parameter types plus type-parameter decoration.
    pub const DEFAULT: Self = Self {
        method: MethodFlags {
            parameter_types: true,
            app_type_parameters: true,
            ..MethodFlags::NONE
        },
        ty: TypeFlags {
            type_parameters: true,
            ..TypeFlags::NONE
        },
        ..Self::SHOW_BASICS
    };

    /// Every owner prefix.
    pub const ALL_QUALIFIED: Self = Self {
        method: MethodFlags {
            fully_qualified: true,
            ..MethodFlags::NONE
        },
        field: FieldFlags {
            fully_qualified: true,
            ..FieldFlags::NONE
        },
        ty: TypeFlags {
            fully_qualified: true,
            ..TypeFlags::NONE
        },
        declaration: DeclarationFlags {
            qualified: true,
            ..DeclarationFlags::NONE
        },
        unit: UnitFlags {
            qualified: true,
            ..UnitFlags::NONE
        },
        ..Self::SHOW_BASICS
    };

    /// Every owner suffix.
    pub const ALL_POST_QUALIFIED: Self = Self {
        method: MethodFlags {
            post_qualified: true,
            ..MethodFlags::NONE
        },
        field: FieldFlags {
            post_qualified: true,
            ..FieldFlags::NONE
        },
        ty: TypeFlags {
            post_qualified: true,
            ..TypeFlags::NONE
        },
        declaration: DeclarationFlags {
            post_qualified: true,
            ..DeclarationFlags::NONE
        },
        unit: UnitFlags {
            post_qualified: true,
            ..UnitFlags::NONE
        },
        ..Self::SHOW_BASICS
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            method: self.method.union(other.method),
            field: self.field.union(other.field),
            ty: self.ty.union(other.ty),
            declaration: self.declaration.union(other.declaration),
            unit: self.unit.union(other.unit),
            icons: self.icons.union(other.icons),
        }
    }

    /// Looks up a preset by the name the CLI uses for it.
    pub fn preset(name: &str) -> Result<Self> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, flags)| *flags)
            .ok_or_else(|| {
                let known: Vec<&str> = PRESETS.iter().map(|(preset, _)| *preset).collect();
                anyhow!("unknown preset `{}` (expected one of: {})", name, known.join(", "))
            })
    }

    /// Turns on a single option by its `category.option` name.
    pub fn set(&mut self, name: &str) -> Result<()> {
        let (_, toggle) = TOGGLES
            .iter()
            .find(|(flag, _)| *flag == name)
            .ok_or_else(|| anyhow!("unknown flag `{}`", name))?;
        toggle(self);
        Ok(())
    }

    pub fn with(mut self, name: &str) -> Result<Self> {
        self.set(name)?;
        Ok(self)
    }
}

impl BitOr for FormatFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

const PRESETS: &[(&str, FormatFlags)] = &[
    ("default", FormatFlags::DEFAULT),
    ("basics", FormatFlags::SHOW_BASICS),
    ("qualified", FormatFlags::ALL_QUALIFIED),
    ("post_qualified", FormatFlags::ALL_POST_QUALIFIED),
];

type Toggle = fn(&mut FormatFlags);

const TOGGLES: &[(&str, Toggle)] = &[
    ("method.parameter_types", |f| f.method.parameter_types = true),
    ("method.parameter_names", |f| f.method.parameter_names = true),
    ("method.pre_type_parameters", |f| f.method.pre_type_parameters = true),
    ("method.app_type_parameters", |f| f.method.app_type_parameters = true),
    ("method.exceptions", |f| f.method.exceptions = true),
    ("method.app_return_type", |f| f.method.app_return_type = true),
    ("method.pre_return_type", |f| f.method.pre_return_type = true),
    ("method.fully_qualified", |f| f.method.fully_qualified = true),
    ("method.post_qualified", |f| f.method.post_qualified = true),
    ("field.app_type", |f| f.field.app_type = true),
    ("field.pre_type", |f| f.field.pre_type = true),
    ("field.fully_qualified", |f| f.field.fully_qualified = true),
    ("field.post_qualified", |f| f.field.post_qualified = true),
    ("type.fully_qualified", |f| f.ty.fully_qualified = true),
    ("type.container_qualified", |f| f.ty.container_qualified = true),
    ("type.post_qualified", |f| f.ty.post_qualified = true),
    ("type.type_parameters", |f| f.ty.type_parameters = true),
    ("declaration.qualified", |f| f.declaration.qualified = true),
    ("declaration.post_qualified", |f| f.declaration.post_qualified = true),
    ("unit.qualified", |f| f.unit.qualified = true),
    ("unit.post_qualified", |f| f.unit.post_qualified = true),
    ("icons.small", |f| f.icons.small = true),
    ("icons.no_overlay", |f| f.icons.no_overlay = true),
];

/// Every name [`FormatFlags::set`] accepts.
pub fn flag_names() -> impl Iterator<Item = &'static str> {
    TOGGLES.iter().map(|(name, _)| *name)
}

/// Every name [`FormatFlags::preset`] accepts.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}
