//! 界面文案表
//!
//! 两种语言使用同一组键，缺失的键由 [`Localizer`](super::Localizer) 回退为键本身。

use std::collections::HashMap;
use std::sync::LazyLock;

use super::locale::Locale;

pub static DE: &[(&str, &str)] = &[
    // App
    ("appName", "Samla"),
    // 导航与操作
    ("newSet", "Neues Set"),
    ("edit", "Bearbeiten"),
    ("delete", "Löschen"),
    ("save", "Speichern"),
    ("cancel", "Abbrechen"),
    ("close", "Schließen"),
    ("back", "Zurück"),
    ("add", "Hinzufügen"),
    ("remove", "Entfernen"),
    ("confirm", "Bestätigen"),
    ("search", "Suchen"),
    // 菜单
    ("settings", "Einstellungen"),
    ("exportData", "Daten exportieren"),
    ("importData", "Daten importieren"),
    // 搜索
    (
        "searchPlaceholder",
        "Suchen... (@Box, @Produkt, @Hersteller, @Tag, @Ort)",
    ),
    ("sortBy", "Sortieren"),
    ("sortName", "Name"),
    ("sortBox", "Box"),
    ("sortLocation", "Ort"),
    ("sortAdded", "Hinzugefügt"),
    // Set 表单
    ("setName", "Set-Name"),
    ("setNamePlaceholder", "z.B. Briefmarken Deutschland 2020"),
    ("boxNumber", "Karton-Nr."),
    ("bagNumber", "Beutel-Nr."),
    ("auto", "Auto"),
    // 存放位置
    ("location", "Ort"),
    ("room", "Raum"),
    ("roomPlaceholder", "z.B. Wohnzimmer"),
    ("shelf", "Regal"),
    ("shelfPlaceholder", "z.B. Regal 3"),
    ("compartment", "Fach"),
    ("compartmentPlaceholder", "z.B. Fach A"),
    // 产品
    ("products", "Produkte"),
    ("product", "Produkt"),
    ("productName", "Produktname"),
    ("productNamePlaceholder", "z.B. Briefmarke"),
    ("manufacturer", "Hersteller"),
    ("manufacturerPlaceholder", "Hersteller wählen"),
    ("type", "Typ"),
    ("typePlaceholder", "Typ wählen"),
    ("quantity", "Menge"),
    ("addProduct", "Produkt hinzufügen"),
    ("noProducts", "Keine Produkte"),
    // 标签
    ("tags", "Tags"),
    ("tagsPlaceholder", "Tag eingeben und Enter drücken"),
    // 图片
    ("photo", "Foto"),
    ("addPhoto", "Foto hinzufügen"),
    ("changePhoto", "Foto ändern"),
    ("removePhoto", "Foto entfernen"),
    ("cropImage", "Bild zuschneiden"),
    // 基础数据
    ("masterData", "Stammdaten"),
    ("manufacturers", "Hersteller"),
    ("types", "Typen"),
    ("newManufacturer", "Neuer Hersteller"),
    ("newType", "Neuer Typ"),
    ("newTag", "Neuer Tag"),
    // 空状态
    ("noSets", "Keine Sets vorhanden"),
    (
        "noSetsDescription",
        "Erstellen Sie Ihr erstes Set, um zu beginnen.",
    ),
    ("noResults", "Keine Ergebnisse"),
    ("noResultsDescription", "Versuchen Sie andere Suchbegriffe."),
    // 确认
    ("confirmDelete", "Löschen bestätigen"),
    ("confirmDeleteSet", "Möchten Sie dieses Set wirklich löschen?"),
    (
        "confirmDeleteProduct",
        "Möchten Sie dieses Produkt wirklich löschen?",
    ),
    ("confirmImport", "Import bestätigen"),
    (
        "confirmImportMessage",
        "Beim Import werden alle bestehenden Daten überschrieben. Fortfahren?",
    ),
    // 设置面板
    ("settingsTitle", "Einstellungen"),
    ("language", "Sprache"),
    ("german", "Deutsch"),
    ("english", "English"),
    ("dataManagement", "Datenverwaltung"),
    ("openDataFolder", "Datenordner öffnen"),
    ("storagePaths", "Speicherpfade"),
    ("baseDirectory", "Basisverzeichnis"),
    ("database", "Datenbank"),
    ("images", "Bilder"),
    ("statistics", "Statistiken"),
    ("statsSets", "Sets"),
    ("statsProducts", "Produkte"),
    ("statsManufacturers", "Hersteller"),
    ("statsTypes", "Typen"),
    ("statsTags", "Tags"),
    ("statsImages", "Bilder"),
    ("about", "Über"),
    ("version", "Version"),
    // 消息
    ("exportSuccess", "Export erfolgreich"),
    ("exportError", "Export fehlgeschlagen"),
    ("importSuccess", "Import erfolgreich"),
    ("importError", "Import fehlgeschlagen"),
    ("saveSuccess", "Gespeichert"),
    ("saveError", "Speichern fehlgeschlagen"),
    ("deleteSuccess", "Gelöscht"),
    ("deleteError", "Löschen fehlgeschlagen"),
];

pub static EN: &[(&str, &str)] = &[
    // App
    ("appName", "Samla"),
    // 导航与操作
    ("newSet", "New Set"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("close", "Close"),
    ("back", "Back"),
    ("add", "Add"),
    ("remove", "Remove"),
    ("confirm", "Confirm"),
    ("search", "Search"),
    // 菜单
    ("settings", "Settings"),
    ("exportData", "Export Data"),
    ("importData", "Import Data"),
    // 搜索
    (
        "searchPlaceholder",
        "Search... (@Box, @Product, @Manufacturer, @Tag, @Location)",
    ),
    ("sortBy", "Sort by"),
    ("sortName", "Name"),
    ("sortBox", "Box"),
    ("sortLocation", "Location"),
    ("sortAdded", "Added"),
    // Set 表单
    ("setName", "Set Name"),
    ("setNamePlaceholder", "e.g. Stamp Collection 2020"),
    ("boxNumber", "Box No."),
    ("bagNumber", "Bag No."),
    ("auto", "Auto"),
    // 存放位置
    ("location", "Location"),
    ("room", "Room"),
    ("roomPlaceholder", "e.g. Living Room"),
    ("shelf", "Shelf"),
    ("shelfPlaceholder", "e.g. Shelf 3"),
    ("compartment", "Compartment"),
    ("compartmentPlaceholder", "e.g. Compartment A"),
    // 产品
    ("products", "Products"),
    ("product", "Product"),
    ("productName", "Product Name"),
    ("productNamePlaceholder", "e.g. Stamp"),
    ("manufacturer", "Manufacturer"),
    ("manufacturerPlaceholder", "Select manufacturer"),
    ("type", "Type"),
    ("typePlaceholder", "Select type"),
    ("quantity", "Quantity"),
    ("addProduct", "Add Product"),
    ("noProducts", "No products"),
    // 标签
    ("tags", "Tags"),
    ("tagsPlaceholder", "Enter tag and press Enter"),
    // 图片
    ("photo", "Photo"),
    ("addPhoto", "Add Photo"),
    ("changePhoto", "Change Photo"),
    ("removePhoto", "Remove Photo"),
    ("cropImage", "Crop Image"),
    // 基础数据
    ("masterData", "Master Data"),
    ("manufacturers", "Manufacturers"),
    ("types", "Types"),
    ("newManufacturer", "New Manufacturer"),
    ("newType", "New Type"),
    ("newTag", "New Tag"),
    // 空状态
    ("noSets", "No sets yet"),
    ("noSetsDescription", "Create your first set to get started."),
    ("noResults", "No results"),
    ("noResultsDescription", "Try different search terms."),
    // 确认
    ("confirmDelete", "Confirm Delete"),
    ("confirmDeleteSet", "Are you sure you want to delete this set?"),
    (
        "confirmDeleteProduct",
        "Are you sure you want to delete this product?",
    ),
    ("confirmImport", "Confirm Import"),
    (
        "confirmImportMessage",
        "Importing will overwrite all existing data. Continue?",
    ),
    // 设置面板
    ("settingsTitle", "Settings"),
    ("language", "Language"),
    ("german", "Deutsch"),
    ("english", "English"),
    ("dataManagement", "Data Management"),
    ("openDataFolder", "Open Data Folder"),
    ("storagePaths", "Storage Paths"),
    ("baseDirectory", "Base Directory"),
    ("database", "Database"),
    ("images", "Images"),
    ("statistics", "Statistics"),
    ("statsSets", "Sets"),
    ("statsProducts", "Products"),
    ("statsManufacturers", "Manufacturers"),
    ("statsTypes", "Types"),
    ("statsTags", "Tags"),
    ("statsImages", "Images"),
    ("about", "About"),
    ("version", "Version"),
    // 消息
    ("exportSuccess", "Export successful"),
    ("exportError", "Export failed"),
    ("importSuccess", "Import successful"),
    ("importError", "Import failed"),
    ("saveSuccess", "Saved"),
    ("saveError", "Save failed"),
    ("deleteSuccess", "Deleted"),
    ("deleteError", "Delete failed"),
];

static DE_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DE.iter().copied().collect());

static EN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EN.iter().copied().collect());

/// 获取指定语言的文案表
pub fn table(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    match locale {
        Locale::De => &DE_TABLE,
        Locale::En => &EN_TABLE,
    }
}

/// 查询文案，不存在时返回 `None`
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale).get(key).copied()
}
