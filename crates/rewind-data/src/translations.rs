include!(concat!(env!("OUT_DIR"), "/translations.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keys_have_fallbacks() {
        assert_eq!(
            translation_fallback_1_21_2("entity.minecraft.creaking"),
            Some("Creaking")
        );
        assert_eq!(translation_fallback_1_21_2("entity.minecraft.zombie"), None);
    }
}
