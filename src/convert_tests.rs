// End-to-end conversions: .ins text through the reader, builder and
// emitter, checking the exact C output.

#[cfg(test)]
mod tests {
    use crate::builder::TableBuilder;
    use crate::error::ConvertError;
    use crate::mode::Mode;
    use crate::output::RowEmitter;
    use ins_file::IniDocument;

    fn convert(mode: Mode, text: &str) -> Result<String, ConvertError> {
        let doc = IniDocument::parse(text).unwrap();
        let tables = TableBuilder::new(mode, &doc).build()?;
        let emitter = RowEmitter::new(mode);
        let rows = emitter.collect_rows(&tables);
        Ok(emitter.build_output(&rows))
    }

    #[test]
    fn test_minimal_gm_conversion() {
        let output = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             Patch[0]=BankA\n\
             [General MIDI Level 2 Drumsets]\n\
             [BankA]\n\
             0=Grand Piano\n",
        )
        .unwrap();

        assert_eq!(output, "    {'M',   0,   0,   0, \"BankA\", \"Grand Piano\"},\n");
    }

    #[test]
    fn test_rows_sort_by_address_not_insertion_order() {
        let output = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             Patch[5]=Bank Five\n\
             Patch[1]=Bank One\n\
             [General MIDI Level 2 Drumsets]\n\
             [Bank Five]\n\
             0=Five Zero\n\
             [Bank One]\n\
             0=One Zero\n",
        )
        .unwrap();

        let expected = concat!(
            "    {'M',   0,   1,   0, \"Bank One\", \"One Zero\"},\n",
            "    {'M',   0,   5,   0, \"Bank Five\", \"Five Zero\"},\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_gm_prefix_rewrite_end_to_end() {
        let output = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             Patch[1]=General MIDI Level 2 Piano\n\
             [General MIDI Level 2 Drumsets]\n\
             [General MIDI Level 2 Piano]\n\
             0=Grand Piano\n",
        )
        .unwrap();

        assert_eq!(
            output,
            "    {'M',   0,   1,   0, \"GM2 Piano\", \"Grand Piano\"},\n"
        );
    }

    #[test]
    fn test_quote_escaping_end_to_end() {
        let output = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             Patch[0]=Bank \"Q\"\n\
             [General MIDI Level 2 Drumsets]\n\
             [Bank \"Q\"]\n\
             0=He said \"hi\"\n",
        )
        .unwrap();

        assert_eq!(
            output,
            "    {'M',   0,   0,   0, \"Bank \\\"Q\\\"\", \"He said \\\"hi\\\"\"},\n"
        );
    }

    #[test]
    fn test_xg_drum_conversion_inverts_display_msb() {
        let output = convert(
            Mode::Xg,
            "[YAMAHA MU1000/MU2000]\n\
             [YAMAHA MU1000/MU2000 Drumsets]\n\
             Key[256,5]=YAMAHA MU1000/MU2000 Kit\n\
             [YAMAHA MU1000/MU2000 Kit]\n\
             36=Kick\n",
        )
        .unwrap();

        assert_eq!(output, "    {'P', 125,   5,  36, \"XG Kit\", \"Kick\"},\n");
    }

    #[test]
    fn test_sonar_gs_has_no_rewrite_or_inversion() {
        let output = convert(
            Mode::SonarGs,
            "[Roland GS]\n\
             [Roland GS Drumsets]\n\
             Key[1,48]=Roland GS Orchestra Kit\n\
             [Roland GS Orchestra Kit]\n\
             38=Concert Snare\n",
        )
        .unwrap();

        assert_eq!(
            output,
            "    {'P',   1,  48,  38, \"Roland GS Orchestra Kit\", \"Concert Snare\"},\n"
        );
    }

    #[test]
    fn test_non_gm_drops_bank_zero_rows() {
        let output = convert(
            Mode::Gs,
            "[Microsoft GS Wavetable Synth]\n\
             Patch[0]=Microsoft GS Capital Tones\n\
             Patch[1]=Microsoft GS Variation\n\
             [Microsoft GS Wavetable Synth Drumsets]\n\
             Key[0,0]=Microsoft GS Standard Kit\n\
             [Microsoft GS Capital Tones]\n\
             0=Piano 1\n\
             [Microsoft GS Variation]\n\
             0=Detuned Piano\n\
             [Microsoft GS Standard Kit]\n\
             36=Kick\n\
             60=Hi Bongo\n",
        )
        .unwrap();

        // Bank 0 vanishes for both groups; only the variation bank stays.
        assert_eq!(
            output,
            "    {'M',   0,   1,   0, \"GS Variation\", \"Detuned Piano\"},\n"
        );
    }

    #[test]
    fn test_gm_keeps_bank_zero_drums() {
        let output = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             [General MIDI Level 2 Drumsets]\n\
             Key[0,0]=General MIDI Level 2 Standard Kit\n\
             [General MIDI Level 2 Standard Kit]\n\
             36=Kick\n",
        )
        .unwrap();

        assert_eq!(
            output,
            "    {'P',   0,   0,  36, \"GM2 Standard Kit\", \"Kick\"},\n"
        );
    }

    #[test]
    fn test_missing_patch_section_produces_no_output() {
        let err = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             Patch[0]=Nowhere\n\
             [General MIDI Level 2 Drumsets]\n",
        )
        .unwrap_err();

        assert_eq!(err, ConvertError::PatchSectionNotFound("Nowhere".to_string()));
    }

    #[test]
    fn test_invalid_patch_number_is_fatal_end_to_end() {
        let err = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             Patch[0]=BankA\n\
             [General MIDI Level 2 Drumsets]\n\
             [BankA]\n\
             128=Too High\n",
        )
        .unwrap_err();

        assert_eq!(err, ConvertError::InvalidPatchNumber(128));
    }

    #[test]
    fn test_extraneous_keys_are_tolerated() {
        let output = convert(
            Mode::Gm,
            "[General MIDI Level 2]\n\
             BasedOn=General MIDI\n\
             Patch[0]=BankA\n\
             [General MIDI Level 2 Drumsets]\n\
             UseNotesForRhythm=0\n\
             [BankA]\n\
             Comment=not a patch\n\
             0=Grand Piano\n",
        )
        .unwrap();

        assert_eq!(output, "    {'M',   0,   0,   0, \"BankA\", \"Grand Piano\"},\n");
    }
}
