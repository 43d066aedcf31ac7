/// A named discrete option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    /// The canonical identifier used in generated code, e.g. `MORPH_RECT`.
    pub symbol: &'static str,
    /// The human readable description shown in the window title.
    pub description: &'static str,
}

/// An ordered, non-empty, read-only list of options.
#[derive(Debug, Clone, Copy)]
pub struct OptionTable {
    entries: &'static [OptionEntry],
}

impl OptionTable {
    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, tables are built with at least one entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, wrapping around the table length.
    #[inline]
    pub fn entry(&self, index: usize) -> &'static OptionEntry {
        let entries: &'static [OptionEntry] = self.entries;
        &entries[index % entries.len()]
    }
}

/// Structuring element shapes for morphological operations.
///
/// The variant order matches [`MORPH_SHAPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphShape {
    /// A filled rectangle.
    Rect,
    /// A cross through the anchor.
    Cross,
    /// An ellipse inscribed in the kernel rectangle.
    Ellipse,
}

impl MorphShape {
    /// All shapes in table order.
    pub const ALL: [MorphShape; 3] = [MorphShape::Rect, MorphShape::Cross, MorphShape::Ellipse];

    /// Returns the shape at a table index.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the table entry describing this shape.
    pub fn entry(self) -> &'static OptionEntry {
        MORPH_SHAPES.entry(self as usize)
    }
}

/// Border handling modes used to synthesize pixels outside the image.
///
/// The variant order matches [`BORDER_MODES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Fills the border with a constant value.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// Repeats the outermost row or column.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Mirrors the pixels, starting with the edge pixel itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// Mirrors the pixels, starting with the pixel next to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,
}

impl BorderMode {
    /// All modes in table order.
    pub const ALL: [BorderMode; 4] = [
        BorderMode::Constant,
        BorderMode::Replicate,
        BorderMode::Reflect,
        BorderMode::Reflect101,
    ];

    /// Returns the mode at a table index.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the table entry describing this mode.
    pub fn entry(self) -> &'static OptionEntry {
        BORDER_MODES.entry(self as usize)
    }
}

/// Structuring element shapes, in cycling order.
pub static MORPH_SHAPES: OptionTable = OptionTable {
    entries: &[
        OptionEntry {
            symbol: "MORPH_RECT",
            description: "Rectangle",
        },
        OptionEntry {
            symbol: "MORPH_CROSS",
            description: "Cross",
        },
        OptionEntry {
            symbol: "MORPH_ELLIPSE",
            description: "Ellipse",
        },
    ],
};

/// Border handling modes, in cycling order.
pub static BORDER_MODES: OptionTable = OptionTable {
    entries: &[
        OptionEntry {
            symbol: "BORDER_CONSTANT",
            description: "Border Constant",
        },
        OptionEntry {
            symbol: "BORDER_REPLICATE",
            description: "Border Replicate",
        },
        OptionEntry {
            symbol: "BORDER_REFLECT",
            description: "Border Reflect",
        },
        OptionEntry {
            symbol: "BORDER_REFLECT_101",
            description: "Border Reflect 101",
        },
    ],
};

/// A cyclic cursor over an [`OptionTable`].
///
/// The cursor starts at index 0 and can never leave the table.
#[derive(Debug, Clone)]
pub struct EnumCycler {
    table: &'static OptionTable,
    index: usize,
}

impl EnumCycler {
    /// Creates a cursor at the first entry of `table`.
    pub fn new(table: &'static OptionTable) -> Self {
        Self { table, index: 0 }
    }

    /// Advances the cursor, wrapping from the last entry to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.table.len();
        self.index
    }

    /// Retreats the cursor, wrapping from the first entry to the last.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.table.len() - 1) % self.table.len();
        self.index
    }

    /// Returns the current cursor position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the entry under the cursor.
    #[inline]
    pub fn current(&self) -> &'static OptionEntry {
        self.table.entry(self.index)
    }
}
