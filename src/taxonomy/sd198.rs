// SD-198 class names are exact tokens straight out of classes.txt, so no
// normalization here. Nevus_Comedonicus and Onychomycosis could arguably
// sit in two groups each; they are pinned to one.
const GROUPS: &[(&str, &str)] = &[
    ("Acne_Vulgaris", "Acneiform"),
    ("Acne_Keloidalis_Nuchae", "Acneiform"),
    ("Pomade_Acne", "Acneiform"),
    ("Pseudofolliculitis_Barbae", "Acneiform"),
    ("Atopic_Dermatitis", "Eczema"),
    ("Nummular_Eczema", "Eczema"),
    ("Seborrheic_Dermatitis", "Eczema"),
    ("Dyshidrosiform_Eczema", "Eczema"),
    ("Allergic_Contact_Dermatitis", "Eczema"),
    ("Stasis_Dermatitis", "Eczema"),
    ("Neurodermatitis", "Eczema"),
    ("Frictional_Lichenoid_Dermatitis", "Eczema"),
    ("Perioral_Dermatitis", "Eczema"),
    ("Psoriasis", "Psoriasis"),
    ("Guttate_Psoriasis", "Psoriasis"),
    ("Scalp_Psoriasis", "Psoriasis"),
    ("Pustular_Psoriasis", "Psoriasis"),
    ("Nail_Psoriasis", "Psoriasis"),
    ("Mucous_Membrane_Psoriasis", "Psoriasis"),
    ("Tinea_Corporis", "Fungal"),
    ("Tinea_Cruris", "Fungal"),
    ("Tinea_Faciale", "Fungal"),
    ("Tinea_Manus", "Fungal"),
    ("Tinea_Pedis", "Fungal"),
    ("Tinea_Versicolor", "Fungal"),
    ("Herpes_Simplex_Virus", "Viral"),
    ("Herpes_Zoster", "Viral"),
    ("Molluscum_Contagiosum", "Viral"),
    ("Verruca_Vulgaris", "Viral"),
    ("Impetigo", "Bacterial"),
    ("Cellulitis", "Bacterial"),
    ("Folliculitis", "Bacterial"),
    ("Melasma", "Pigmentation"),
    ("Vitiligo", "Pigmentation"),
    ("Cafe_Au_Lait_Macule", "Pigmentation"),
    ("Hyperpigmentation", "Pigmentation"),
    ("Actinic_solar_Damage(Pigmentation)", "Pigmentation"),
    ("Seborrheic_Keratosis", "Benign_Tumor"),
    ("Dermatofibroma", "Benign_Tumor"),
    ("Syringoma", "Benign_Tumor"),
    ("Lipoma", "Benign_Tumor"),
    ("Nevus_Comedonicus", "Benign_Tumor"),
    ("Sebaceous_Gland_Hyperplasia", "Benign_Tumor"),
    ("Basal_Cell_Carcinoma", "Malignant"),
    ("Bowen's_Disease", "Malignant"),
    ("Malignant_Melanoma", "Malignant"),
    ("Lentigo_Maligna_Melanoma", "Malignant"),
    ("Beau's_Lines", "Nail_Disorder"),
    ("Nail_Dystrophy", "Nail_Disorder"),
    ("Onycholysis", "Nail_Disorder"),
    ("Onychomycosis", "Nail_Disorder"),
    ("Pincer_Nail_Syndrome", "Nail_Disorder"),
    ("Subungual_Hematoma", "Nail_Disorder"),
    ("Alopecia_Areata", "Alopecia"),
    ("Androgenetic_Alopecia", "Alopecia"),
    ("Scarring_Alopecia", "Alopecia"),
    ("Discoid_Lupus_Erythematosus", "Autoimmune"),
    ("Lichen_Planus", "Autoimmune"),
    ("Lichen_Simplex_Chronicus", "Autoimmune"),
    ("Morphea", "Autoimmune"),
    ("Angioma", "Vascular"),
    ("Strawberry_Hemangioma", "Vascular"),
    ("Xerosis", "Other"),
    ("Callus", "Other"),
    ("Ulcer", "Other"),
    ("Scar", "Other"),
];

pub fn group(class_name: &str) -> Option<&'static str> {
    GROUPS
        .iter()
        .find(|(raw, _)| *raw == class_name)
        .map(|(_, grouped)| *grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_classes() {
        assert_eq!(group("Acne_Vulgaris"), Some("Acneiform"));
        assert_eq!(group("Tinea_Pedis"), Some("Fungal"));
        assert_eq!(group("Bowen's_Disease"), Some("Malignant"));
        assert_eq!(group("Xerosis"), Some("Other"));
    }

    #[test]
    fn ambiguous_names_resolve_to_one_pinned_group() {
        assert_eq!(group("Onychomycosis"), Some("Nail_Disorder"));
        assert_eq!(group("Nevus_Comedonicus"), Some("Benign_Tumor"));
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(group("acne_vulgaris"), None);
        assert_eq!(group(" Acne_Vulgaris"), None);
        assert_eq!(group("Eczema"), None);
    }
}
