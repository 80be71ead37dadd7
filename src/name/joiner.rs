/// Separator used in every composite record and field name.
pub const NAME_SEPARATOR: char = '-';

/// Join name components into a single composite identifier.
///
/// Data-entry pages build hierarchical record names (core, core chip,
/// cuttings) out of smaller parts; keeping the separator in one place avoids
/// ad-hoc concatenation drifting across call sites. An empty slice yields an
/// empty string, a single component is returned unchanged.
pub fn join_name_components<S: AsRef<str>>(components: &[S]) -> String {
    components
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(&NAME_SEPARATOR.to_string())
}

/// Name of one 1-meter core section, e.g. `DELGT01-C1-53`.
pub fn core_section_name(well_name: &str, core_number: &str, core_section_number: u32) -> String {
    join_name_components(&[well_name, core_number, &core_section_number.to_string()])
}

/// Name of a core catcher trailing a core section, e.g. `DELGT01-C1-53-CC54`.
///
/// The catcher carries the section name of the core it follows, with its own
/// `CC`-prefixed counter appended.
pub fn core_catcher_name(
    well_name: &str,
    core_number: &str,
    core_section_number: u32,
    catcher_number: u32,
) -> String {
    join_name_components(&[
        well_name,
        core_number,
        &core_section_number.to_string(),
        &format!("CC{}", catcher_number),
    ])
}

/// Name of a core chip, e.g. `DELGT01-C1-53-2-Top`.
pub fn core_chip_name(
    well_name: &str,
    core_number: &str,
    core_section_number: u32,
    core_chip_number: u32,
    from_top_bottom: &str,
) -> String {
    join_name_components(&[
        well_name,
        core_number,
        &core_section_number.to_string(),
        &core_chip_number.to_string(),
        from_top_bottom,
    ])
}
