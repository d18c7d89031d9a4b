//! The packages the PDF utility imports.

/// A third-party package installed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    /// Name passed to `pip install`.
    pub name: &'static str,
    /// What the PDF utility uses it for.
    pub purpose: &'static str,
}

/// Packages in installation order.
pub const PACKAGES: &[Package] = &[
    Package {
        name: "pypdf",
        purpose: "PDF operations",
    },
    Package {
        name: "Pillow",
        purpose: "image handling",
    },
    Package {
        name: "msoffcrypto-tool",
        purpose: "Excel encryption",
    },
];
