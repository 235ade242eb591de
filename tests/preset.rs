mod tests {
    use myrtio_light_forge::color::{BLUE, RED, Rgb};
    use myrtio_light_forge::model::{EffectKind, EffectModel, ModelError, SpeedTier};
    use myrtio_light_forge::preset::{MONTHS, PresetError, PresetStore};

    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    fn active_slots(store: &PresetStore) -> Vec<u8> {
        store
            .iter()
            .filter(|(_, preset)| preset.active)
            .map(|(slot, _)| slot)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let store = PresetStore::with_defaults(70);
        assert_eq!(store.iter().count(), 12);
        assert_eq!(active_slots(&store), vec![1]);

        for (slot, preset) in store.iter() {
            assert_eq!(preset.model.kind(), &EffectKind::Solid);
            assert_eq!(preset.model.color1(), RED);
            assert_eq!(preset.model.color2(), BLUE);
            assert_eq!(preset.model.speed(), SpeedTier::Medium);
            assert_eq!(preset.model.wave_width(), 17);
            assert_eq!(preset.model.slot_id(), Some(slot));
            assert_eq!(preset.model.label(), Some(MONTHS[usize::from(slot) - 1]));
        }
        assert_eq!(store.get(12).unwrap().model.label(), Some("December"));
        assert!(store.get(0).is_none());
        assert!(store.get(13).is_none());
    }

    #[test]
    fn test_update_marks_single_active() {
        let mut store = PresetStore::with_defaults(10);
        let wave = EffectModel::builder(EffectKind::Wave, GREEN).build(10).unwrap();

        store.update(5, &wave).unwrap();
        assert_eq!(active_slots(&store), vec![5]);
        assert_eq!(store.active_slot(), 5);
        assert_eq!(store.active().model.kind(), &EffectKind::Wave);
        assert_eq!(store.get(5).unwrap().model.slot_id(), Some(5));

        store.set_active(9).unwrap();
        assert_eq!(active_slots(&store), vec![9]);

        assert!(matches!(
            store.update(13, &wave),
            Err(PresetError::SlotOutOfRange(13))
        ));
        assert!(matches!(
            store.set_active(0),
            Err(PresetError::SlotOutOfRange(0))
        ));
        assert_eq!(active_slots(&store), vec![9]);
    }

    #[test]
    fn test_models_in_calendar_order() {
        let mut store = PresetStore::with_defaults(10);
        let wave = EffectModel::builder(EffectKind::Wave, GREEN).build(10).unwrap();
        store.update(2, &wave).unwrap();

        let models = store.models();
        assert_eq!(models.len(), 12);
        assert_eq!(models[1].kind(), &EffectKind::Wave);
        assert_eq!(models[0].kind(), &EffectKind::Solid);
    }

    #[test]
    fn test_json_fills_missing_slots() {
        let json = r##"{"presets": [
            {"kind": "gradient", "color1": "#00FF00", "color2": "#0000FF",
             "slot_id": 3, "active": true, "description": "spring"}
        ]}"##;
        let store = PresetStore::from_json(json, 20).unwrap();

        let march = store.get(3).unwrap();
        assert_eq!(march.model.kind(), &EffectKind::Gradient);
        assert_eq!(march.model.color1(), GREEN);
        assert_eq!(march.description.as_deref(), Some("spring"));
        assert_eq!(store.active_slot(), 3);

        let january = store.get(1).unwrap();
        assert_eq!(january.model.label(), Some("January"));
        assert!(!january.active);
    }

    #[test]
    fn test_json_legacy_preset() {
        let json = r##"{"presets": [
            {"tipo": "Onda", "color1": "#FF0000", "color2": "#0000FF",
             "velocidade": "Lento", "mes": 7, "nome_mes": "Julho"},
            {"tipo": "Cor sólida", "color1": "#00FF00", "mes": 2,
             "nome_mes": "Fevereiro", "ativo": true, "descricao": "Efeito salvo"}
        ]}"##;
        let store = PresetStore::from_json(json, 8).unwrap();
        let july = store.get(7).unwrap();
        assert_eq!(july.model.kind(), &EffectKind::Wave);
        assert_eq!(july.model.speed(), SpeedTier::Slow);
        assert_eq!(july.model.label(), Some("Julho"));
        assert!(!july.active);

        let february = store.get(2).unwrap();
        assert!(february.active);
        assert_eq!(february.description.as_deref(), Some("Efeito salvo"));
        assert_eq!(store.active_slot(), 2);
        assert_eq!(active_slots(&store), vec![2]);
    }

    #[test]
    fn test_json_without_active_marker() {
        let json = r##"{"presets": [{"kind": "solid", "color1": "#FF0000", "slot_id": 5}]}"##;
        let store = PresetStore::from_json(json, 8).unwrap();
        assert!(active_slots(&store).is_empty());
        assert_eq!(store.active_slot(), 1);
    }

    #[test]
    fn test_json_slot_from_position() {
        let json = r##"{"presets": [
            {"kind": "solid", "color1": "#010203"},
            {"kind": "solid", "color1": "#040506"}
        ]}"##;
        let store = PresetStore::from_json(json, 8).unwrap();
        assert_eq!(store.get(2).unwrap().model.color1(), Rgb::new(4, 5, 6));
        assert_eq!(store.get(2).unwrap().model.slot_id(), Some(2));
    }

    #[test]
    fn test_json_first_active_wins() {
        let json = r##"{"presets": [
            {"kind": "solid", "color1": "#FF0000", "slot_id": 4, "active": true},
            {"kind": "solid", "color1": "#FF0000", "slot_id": 2, "active": true}
        ]}"##;
        let store = PresetStore::from_json(json, 8).unwrap();
        assert_eq!(active_slots(&store), vec![4]);
    }

    #[test]
    fn test_json_errors() {
        let duplicate = r##"{"presets": [
            {"kind": "solid", "color1": "#FF0000", "slot_id": 2},
            {"kind": "wave", "color1": "#FF0000", "slot_id": 2}
        ]}"##;
        assert!(matches!(
            PresetStore::from_json(duplicate, 8),
            Err(PresetError::DuplicateSlot(2))
        ));

        let out_of_range = r##"{"presets": [{"kind": "solid", "color1": "#FF0000", "slot_id": 13}]}"##;
        assert!(matches!(
            PresetStore::from_json(out_of_range, 8),
            Err(PresetError::SlotOutOfRange(13))
        ));

        let unknown_kind = r##"{"presets": [{"kind": "pulse", "color1": "#FF0000"}]}"##;
        assert!(matches!(
            PresetStore::from_json(unknown_kind, 8),
            Err(PresetError::InvalidModel(ModelError::UnknownKind(_)))
        ));

        assert!(matches!(
            PresetStore::from_json("{", 8),
            Err(PresetError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_markers() {
        let mut store = PresetStore::with_defaults(12);
        let wave = EffectModel::builder(EffectKind::Wave, GREEN)
            .blink(true)
            .build(12)
            .unwrap();
        store.update(11, &wave).unwrap();
        store.set_description(11, Some("Holidays".to_string())).unwrap();

        let json = store.to_json().unwrap();
        let parsed = PresetStore::from_json(&json, 12).unwrap();
        assert_eq!(parsed, store);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("presets.json");

        let loaded = PresetStore::load(&path, 10).unwrap();
        assert_eq!(loaded, PresetStore::with_defaults(10));

        let mut store = PresetStore::with_defaults(10);
        let wave = EffectModel::builder(EffectKind::Wave, GREEN).build(10).unwrap();
        store.update(6, &wave).unwrap();
        store.save(&path).unwrap();

        let loaded = PresetStore::load(&path, 10).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_or_default_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "{ corrupt").unwrap();

        assert!(PresetStore::load(&path, 10).is_err());
        assert_eq!(
            PresetStore::load_or_default(&path, 10),
            PresetStore::with_defaults(10)
        );
    }
}
