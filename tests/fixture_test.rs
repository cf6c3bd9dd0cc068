#[cfg(test)]
mod fixture_tests {
    use std::fs;

    use claimdrop_fixture_gen::allocations::{
        self, ADDRESS_INDEX_WIDTH, ADDRESS_PREFIX, OUTPUT_FILE,
    };
    use claimdrop_fixture_gen::output;

    #[test]
    fn test_end_to_end_file_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);

        let msg = allocations::build_message();
        output::write_fixture(&path, &msg).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let top = value.as_object().unwrap();
        assert_eq!(top.len(), 1);

        let inner = top["add_allocations"].as_object().unwrap();
        assert_eq!(inner.len(), 1);

        let entries = inner["allocations"].as_array().unwrap();
        assert_eq!(entries.len(), 4999);

        for entry in entries {
            let pair = entry.as_array().unwrap();
            assert_eq!(pair.len(), 2);
            let address = pair[0].as_str().unwrap();
            assert!(address.starts_with(ADDRESS_PREFIX));
            assert_eq!(address.len(), ADDRESS_PREFIX.len() + ADDRESS_INDEX_WIDTH);
            assert!(pair[1].as_str().unwrap().parse::<u128>().is_ok());
        }

        let first = entries[0].as_array().unwrap();
        assert_eq!(first[0], allocations::dummy_address(1));
        assert_eq!(first[1], "1000");
    }

    #[test]
    fn test_boundary_entries() {
        let entries = allocations::build_allocations();

        let first = entries.first().unwrap();
        assert_eq!(
            first.address(),
            "mantra1dummy0000000000000000000000000000000000000001"
        );
        assert_eq!(first.amount(), "1000");

        let last = entries.last().unwrap();
        assert_eq!(
            last.address(),
            "mantra1dummy0000000000000000000000000000000000004999"
        );
        assert_eq!(last.amount(), "4999000");
    }

    #[test]
    fn test_idempotent_runs_produce_identical_files() {
        let dir = tempfile::tempdir().unwrap();
        let first_path = dir.path().join("run1.json");
        let second_path = dir.path().join("run2.json");

        output::write_fixture(&first_path, &allocations::build_message()).unwrap();
        output::write_fixture(&second_path, &allocations::build_message()).unwrap();

        let first_bytes = fs::read(&first_path).unwrap();
        let second_bytes = fs::read(&second_path).unwrap();
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn test_round_trip_reproduces_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);

        let msg = allocations::build_message();
        output::write_fixture(&path, &msg).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed = output::load_fixture(&path).unwrap();
        let reserialized = output::render_message(&parsed).unwrap();

        assert_eq!(reserialized, raw);
    }
}
