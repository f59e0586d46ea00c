//! The bundled search table.
//!
//! This is the letter-`t` variables page of the QtDataSync/QtMvvm API
//! reference, exactly as the documentation generator emitted it. Flag `0`
//! targets point into external tag-file documentation, the single flag `1`
//! target into the locally generated pages.

use crate::index::SearchIndex;
use crate::types::{ScopeFlag, SearchEntry, SearchTarget};

type RawTarget = (&'static str, u8, &'static str);

const TABLE: &[(&str, &str, &[RawTarget])] = &[
    (
        "tabfeatures",
        "TabFeatures",
        &[(
            "https://doc.qt.io/qt-5/qstyleoptiontab.html#TabFeature-enum",
            0,
            "QStyleOptionTab",
        )],
    ),
    (
        "targetaccessmodes",
        "TargetAccessModes",
        &[(
            "https://doc.qt.io/qt-5/qnearfieldmanager.html#TargetAccessMode-enum",
            0,
            "QNearFieldManager",
        )],
    ),
    (
        "textinteractionflags",
        "TextInteractionFlags",
        &[("https://doc.qt.io/qt-5/qt.html#TextInteractionFlag-enum", 0, "Qt")],
    ),
    (
        "texturecoordinatestransformmode",
        "TextureCoordinatesTransformMode",
        &[
            (
                "https://doc.qt.io/qt-5/qsgimagenode.html#TextureCoordinatesTransformFlag-enum",
                0,
                "QSGImageNode::TextureCoordinatesTransformMode()",
            ),
            (
                "https://doc.qt.io/qt-5/qsgsimpletexturenode.html#TextureCoordinatesTransformFlag-enum",
                0,
                "QSGSimpleTextureNode::TextureCoordinatesTransformMode()",
            ),
        ],
    ),
    (
        "title",
        "title",
        &[
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#a724d89e76d48c8f4b2bf3d5d30b22a0c",
                0,
                "QtMvvm::SettingsElements::Category::title()",
            ),
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#a6b2bcfe71379121f4e9af4564b138b5e",
                0,
                "QtMvvm::SettingsElements::Entry::title()",
            ),
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#ad74a2b8be0355ae29abcba131684f2a4",
                0,
                "QtMvvm::SettingsElements::Group::title()",
            ),
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#a06aee78a3b4b8ae5bbc71fd6762b4f1a",
                0,
                "QtMvvm::SettingsElements::Section::title()",
            ),
        ],
    ),
    (
        "toolbarareas",
        "ToolBarAreas",
        &[("https://doc.qt.io/qt-5/qt.html#ToolBarArea-enum", 0, "Qt")],
    ),
    (
        "toolbarfeatures",
        "ToolBarFeatures",
        &[(
            "https://doc.qt.io/qt-5/qstyleoptiontoolbar.html#ToolBarFeature-enum",
            0,
            "QStyleOptionToolBar",
        )],
    ),
    (
        "toolbuttonfeatures",
        "ToolButtonFeatures",
        &[(
            "https://doc.qt.io/qt-5/qstyleoptiontoolbutton.html#ToolButtonFeature-enum",
            0,
            "QStyleOptionToolButton",
        )],
    ),
    (
        "tooltip",
        "tooltip",
        &[
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#acbd7563ae8dbfd8ed66c75a44b26caaa",
                0,
                "QtMvvm::SettingsElements::Category::tooltip()",
            ),
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#af7dc7a43b7d4ef3997fbf8b0765bb068",
                0,
                "QtMvvm::SettingsElements::Entry::tooltip()",
            ),
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#af2edfef7f0cfd2b1ad867a7a0b5ce14f",
                0,
                "QtMvvm::SettingsElements::Group::tooltip()",
            ),
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#afc9b982347eea0a24291c2f9c8be8cb2",
                0,
                "QtMvvm::SettingsElements::Section::tooltip()",
            ),
        ],
    ),
    (
        "touchpointstates",
        "TouchPointStates",
        &[("https://doc.qt.io/qt-5/qt.html#TouchPointState-enum", 0, "Qt")],
    ),
    (
        "transformations",
        "Transformations",
        &[(
            "https://doc.qt.io/qt-5/qimageiohandler.html#Transformation-enum",
            0,
            "QImageIOHandler",
        )],
    ),
    (
        "travelmodes",
        "TravelModes",
        &[(
            "https://doc.qt.io/qt-5/qgeorouterequest.html#TravelMode-enum",
            0,
            "QGeoRouteRequest",
        )],
    ),
    (
        "twoway",
        "TwoWay",
        &[
            (
                "https://doc.qt.io/qt-5/class_qt_mvvm_1_1_binding.html#a6a03a1d2ac1775e202aa7ae65fb76315a8248e753de211820e05f5b5e35ad9db8",
                0,
                "QtMvvm::Binding::TwoWay()",
            ),
            (
                "https://doc.qt.io/qt-5/classde_1_1skycoder42_1_1_qt_mvvm_1_1_core_1_1_mvvm_binding.html#a0b01dfe1a8b4a7c6b2d888fd561ed7eea64d301545d44bab378d460a2763b8bd0",
                0,
                "de::skycoder42::QtMvvm::Core::MvvmBinding::TwoWay()",
            ),
        ],
    ),
    (
        "type",
        "type",
        &[
            (
                "https://doc.qt.io/qt-5/namespace_qt_mvvm_1_1_settings_elements.html#aceec6ba146dd2e3d86125a20c3d58fe8",
                0,
                "QtMvvm::SettingsElements::Entry::type()",
            ),
            (
                "https://doc.qt.io/qt-5/qglobalstatic.html#Type-typedef",
                0,
                "QGlobalStatic::Type()",
            ),
            (
                "https://doc.qt.io/qt-5/qshareddatapointer.html#Type-typedef",
                0,
                "QSharedDataPointer::Type()",
            ),
            (
                "https://doc.qt.io/qt-5/qexplicitlyshareddatapointer.html#Type-typedef",
                0,
                "QExplicitlySharedDataPointer::Type()",
            ),
        ],
    ),
    (
        "typecolordialog",
        "TypeColorDialog",
        &[(
            "https://doc.qt.io/qt-5/class_qt_mvvm_1_1_message_config.html#a52011f5904343e09758633a77ea8d2f2",
            0,
            "QtMvvm::MessageConfig",
        )],
    ),
    (
        "typefiledialog",
        "TypeFileDialog",
        &[(
            "https://doc.qt.io/qt-5/class_qt_mvvm_1_1_message_config.html#a4e605350d96923e7bdf000388fc514f5",
            0,
            "QtMvvm::MessageConfig",
        )],
    ),
    (
        "typeflags",
        "TypeFlags",
        &[("https://doc.qt.io/qt-5/qmetatype.html#TypeFlag-enum", 0, "QMetaType")],
    ),
    (
        "typeinputdialog",
        "TypeInputDialog",
        &[(
            "https://doc.qt.io/qt-5/class_qt_mvvm_1_1_message_config.html#ae80918dc646fe89d59a1ddfed729d1b7",
            0,
            "QtMvvm::MessageConfig",
        )],
    ),
    (
        "typemessagebox",
        "TypeMessageBox",
        &[(
            "https://doc.qt.io/qt-5/class_qt_mvvm_1_1_message_config.html#a4bf2b7c1738a86009303fbb07dcad08c",
            0,
            "QtMvvm::MessageConfig",
        )],
    ),
    (
        "typename",
        "typeName",
        &[(
            "../struct_qt_data_sync_1_1_object_key.html#aa11070fb0b83296dc71124257b404aee",
            1,
            "QtDataSync::ObjectKey",
        )],
    ),
    (
        "typeprogressdialog",
        "TypeProgressDialog",
        &[(
            "https://doc.qt.io/qt-5/class_qt_mvvm_1_1_message_config.html#a10a4630967ff5b75caf06f6e1157b7e6",
            0,
            "QtMvvm::MessageConfig",
        )],
    ),
    (
        "types",
        "Types",
        &[("https://doc.qt.io/qt-5/qopengldebugmessage.html#Type-enum", 0, "QOpenGLDebugMessage")],
    ),
];

/// Build the bundled table as an owned [`SearchIndex`].
pub fn builtin() -> SearchIndex {
    let entries = TABLE
        .iter()
        .map(|&(key, label, targets)| {
            SearchEntry::new(
                key,
                label,
                targets
                    .iter()
                    .map(|&(url, flag, name)| SearchTarget::new(url, ScopeFlag(flag), name))
                    .collect(),
            )
        })
        .collect();
    SearchIndex::new(entries)
}
