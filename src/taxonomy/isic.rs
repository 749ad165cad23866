// Diagnosis strings in ISIC metadata exports vary in casing and can carry
// stray whitespace. Keys are stored lowercase; lookups normalize first.
const GROUPS: &[(&str, &str)] = &[
    ("nevus", "Benign_Nevus"),
    ("melanoma", "Malignant_Melanoma"),
    ("seborrheic keratosis", "Benign_Keratosis"),
    ("lentigo nos", "Pigmentation_Disorder"),
    ("solar lentigo", "Pigmentation_Disorder"),
    ("lichenoid keratosis", "Pre_Malignant_Lesion"),
];

pub fn group(diagnosis: &str) -> Option<&'static str> {
    let needle = diagnosis.trim().to_lowercase();
    GROUPS
        .iter()
        .find(|(raw, _)| *raw == needle)
        .map(|(_, grouped)| *grouped)
}
