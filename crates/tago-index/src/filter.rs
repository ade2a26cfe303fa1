//! Selects the declarations that become tags.

use tago_core::{DeclKind, Declaration, DeclarationTree, TopLevelDecl};

/// Flatten a parsed file into one [`Declaration`] per taggable identifier.
///
/// Functions and types contribute their name, value specs contribute every
/// name they declare, and everything else is dropped. Source order is kept and
/// blank `_` identifiers are skipped.
pub fn filter_declarations(tree: &DeclarationTree) -> Vec<Declaration> {
    let file = tree.file_path.as_str();
    let mut out = Vec::new();
    for decl in &tree.decls {
        let (kind, idents) = match decl {
            TopLevelDecl::Function(ident) => (DeclKind::Function, std::slice::from_ref(ident)),
            TopLevelDecl::Type(ident) => (DeclKind::Type, std::slice::from_ref(ident)),
            TopLevelDecl::Value(names) => (DeclKind::Value, names.as_slice()),
            TopLevelDecl::Other(_) => continue,
        };
        out.extend(
            idents
                .iter()
                .filter(|ident| !ident.is_placeholder())
                .map(|ident| Declaration::from_ident(kind, file, ident)),
        );
    }
    out
}
