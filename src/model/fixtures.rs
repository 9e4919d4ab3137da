// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ecore::{
    BuiltinType, EAttribute, EClass, EClassifier, EDataType, EEnum, EEnumLiteral, EOperation,
    EPackage, EReference, EStructuralFeature, TypeRef,
};
use super::ids::ElementId;

pub(crate) const PACKAGE_ID: &str = "p:library";
pub(crate) const BOOK_ID: &str = "c:book";
pub(crate) const TITLE_ID: &str = "a:book-title";
pub(crate) const AUTHOR_REF_ID: &str = "r:book-author";
pub(crate) const AUTHOR_ID: &str = "c:author";
pub(crate) const GENRE_ID: &str = "e:genre";
pub(crate) const ISBN_ID: &str = "d:isbn";

fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("fixture element id")
}

/// Small library model: two classes, one enum, one data type.
pub fn library_package() -> EPackage {
    let mut package = EPackage::with_id(eid(PACKAGE_ID), "library", "http://example.org/library");

    let title = EAttribute::with_id(
        eid(TITLE_ID),
        "title",
        TypeRef::Builtin(BuiltinType::EString),
    );
    let author_ref = EReference::with_id(eid(AUTHOR_REF_ID), "author", eid(AUTHOR_ID));
    let mut book = EClass::with_id(eid(BOOK_ID), "Book");
    let features = book.structural_features_mut();
    features.push(EStructuralFeature::Attribute(title));
    features.push(EStructuralFeature::Reference(author_ref));
    let summary = EOperation::with_id(eid("o:book-summary"), "summary");
    book.operations_mut().push(summary);

    let mut author = EClass::with_id(eid(AUTHOR_ID), "Author");
    author.set_abstract(true);

    let mut genre = EEnum::with_id(eid(GENRE_ID), "Genre");
    let fiction = EEnumLiteral::with_id(eid("l:genre-fiction"), "FICTION", 0);
    genre.literals_mut().push(fiction);

    let isbn = EDataType::with_id(eid(ISBN_ID), "Isbn");

    let classifiers = package.classifiers_mut();
    classifiers.push(EClassifier::Class(book));
    classifiers.push(EClassifier::Class(author));
    classifiers.push(EClassifier::Enum(genre));
    classifiers.push(EClassifier::DataType(isbn));
    package
}

/// One empty class `C`, one empty enum `E` and one data type `D`.
#[cfg(test)]
pub(crate) fn scratch_package() -> EPackage {
    let mut package = EPackage::with_id(eid("p:scratch"), "scratch", "urn:scratch");
    let classifiers = package.classifiers_mut();
    classifiers.push(EClassifier::Class(EClass::with_id(eid("c:c"), "C")));
    classifiers.push(EClassifier::Enum(EEnum::with_id(eid("e:e"), "E")));
    classifiers.push(EClassifier::DataType(EDataType::with_id(eid("d:d"), "D")));
    package
}
