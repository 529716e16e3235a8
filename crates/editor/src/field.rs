//! Form fields and focus order.

/// Editable fields of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
    Grade,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Age, Field::Grade];

    /// Position in form order
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Age => 2,
            Field::Grade => 3,
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::Grade => "Grade",
        }
    }

    /// Hint shown while the input is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter student name",
            Field::Email => "Enter email address",
            Field::Age => "Enter age",
            Field::Grade => "Enter grade (e.g., A, B+, A-)",
        }
    }

    /// Whether a typed character may enter this field
    pub fn accepts(self, c: char) -> bool {
        match self {
            Field::Age => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }
}

/// Focusable element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Field(Field),
    Submit,
    Cancel,
}

impl EditorFocus {
    const ORDER: [EditorFocus; 6] = [
        EditorFocus::Field(Field::Name),
        EditorFocus::Field(Field::Email),
        EditorFocus::Field(Field::Age),
        EditorFocus::Field(Field::Grade),
        EditorFocus::Submit,
        EditorFocus::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    /// Next element, wrapping around
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous element, wrapping around
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Focused field, if focus is on an input
    pub fn field(self) -> Option<Field> {
        match self {
            EditorFocus::Field(field) => Some(field),
            _ => None,
        }
    }
}
