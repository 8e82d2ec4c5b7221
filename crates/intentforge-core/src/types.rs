//! Java type model for param fields.
//!
//! The host compiler reports each member's declared type as source text
//! (`"int"`, `"Integer"`, `"com.example.User"`). [`JavaType::parse`] triages
//! that text into primitive, boxed, or declared reference form once, so the
//! classifier and synthesizers never re-inspect strings.

/// The eight Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    /// The primitive's keyword spelling (`int`, `boolean`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// The boxed counterpart's class name (`Integer`, `Boolean`, ...).
    pub const fn boxed_name(self) -> &'static str {
        match self {
            Primitive::Boolean => "Boolean",
            Primitive::Byte => "Byte",
            Primitive::Short => "Short",
            Primitive::Int => "Integer",
            Primitive::Long => "Long",
            Primitive::Char => "Character",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
        }
    }

    /// Parse a primitive keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Parse a boxed class name back to its primitive.
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.boxed_name() == name)
    }

    const ALL: [Primitive; 8] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Char,
        Primitive::Float,
        Primitive::Double,
    ];
}

/// A member's declared type as the host compiler reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    /// A primitive type (`int`).
    Primitive(Primitive),
    /// A boxed primitive (`Integer`).
    Boxed(Primitive),
    /// Any other reference type, with simple and qualified spellings.
    Declared {
        /// Last segment of the source spelling (`User`).
        simple: String,
        /// The source spelling itself (`com.example.User`).
        qualified: String,
    },
}

impl JavaType {
    /// Triage a declared-type source string.
    ///
    /// Boxed class names are reserved: a declared type literally spelled
    /// `Integer` is treated as the box, never as an application class.
    pub fn parse(source: &str) -> Self {
        if let Some(primitive) = Primitive::from_name(source) {
            return JavaType::Primitive(primitive);
        }
        if let Some(primitive) = Primitive::from_boxed_name(source) {
            return JavaType::Boxed(primitive);
        }
        let simple = source.rsplit('.').next().unwrap_or(source).to_string();
        JavaType::Declared {
            simple,
            qualified: source.to_string(),
        }
    }

    /// The spelling used in generated signatures and bodies.
    pub fn simple_name(&self) -> &str {
        match self {
            JavaType::Primitive(p) => p.name(),
            JavaType::Boxed(p) => p.boxed_name(),
            JavaType::Declared { simple, .. } => simple,
        }
    }

    /// The qualified name a generated file must import to use
    /// [`simple_name`](Self::simple_name), if any.
    pub fn import_path(&self) -> Option<&str> {
        match self {
            JavaType::Primitive(_) | JavaType::Boxed(_) => None,
            JavaType::Declared { qualified, .. } => {
                qualified.contains('.').then_some(qualified.as_str())
            }
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_))
    }

    pub fn is_boxed(&self) -> bool {
        matches!(self, JavaType::Boxed(_))
    }
}

impl std::fmt::Display for JavaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JavaType::Declared { qualified, .. } => write!(f, "{qualified}"),
            other => write!(f, "{}", other.simple_name()),
        }
    }
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
