//! Behavior that holds for any report: endpoint filtering, slack verdicts,
//! recomputed delays, line ranges and clock listing order.

use twr_report::{parse, path_at_line, ElementKind, TimingReport};

fn block(verdict: &str, slack: &str, hops: &[f64]) -> String {
    let mut text = format!(
        "Slack ({verdict}) :  {slack} ns\n  Source:  top/reg_a\n  Destination:  top/reg_b\n\n\
         \x20   Location   Delay type   Incr(ns)  Path(ns)  Netlist Resource(s)\n"
    );
    let mut total = 0.0;
    for (i, incr) in hops.iter().enumerate() {
        total += incr;
        text.push_str(&format!(
            "    SLICE_X{i}Y0   LUT2 (Prop_lut2_I0_O)   {incr:.3}   {total:.3} r  u_{i}/O\n"
        ));
    }
    text
}

#[test]
fn met_path_with_two_hops() {
    let report = parse(&block("MET", "0.523", &[0.100, 0.250]));
    assert_eq!(report.paths.len(), 1);
    let path = &report.paths[0];
    assert!(!path.failed);
    assert_eq!(path.slack, 0.523);
    assert_eq!(path.path_elements.len(), 2);
    assert!((path.delay - 0.350).abs() < 0.0005);
}

#[test]
fn violated_path() {
    let report = parse(&block("VIOLATED", "-0.120", &[0.100, 0.250]));
    let path = &report.paths[0];
    assert!(path.failed);
    assert_eq!(path.slack, -0.120);
    assert_eq!(report.summary.critical_path.as_ref(), Some(path));
}

#[test]
fn path_without_endpoints_is_dropped() {
    let text = "\
Slack (MET) :  0.523ns
  Requirement:  2.000ns
    Location   Delay type   Incr(ns)  Path(ns)  Netlist Resource(s)
    SLICE_X0Y0   LUT2 (Prop_lut2_I0_O)   0.100   0.100 r  u_0/O
";
    let report = parse(text);
    assert!(report.paths.is_empty());
    assert_eq!(report.summary, Default::default());
}

#[test]
fn only_complete_paths_take_ids() {
    let text = format!(
        "Slack (MET) :  1.000ns\n  Source:  top/orphan\n{}",
        block("MET", "0.200", &[0.1])
    );
    let report = parse(&text);
    assert_eq!(report.paths.len(), 1);
    assert_eq!(report.paths[0].id, "path_0");
    assert_eq!(report.paths[0].start_line, 2);
}

#[test]
fn path_at_line_inside_and_after_ranges() {
    let text = format!(
        "{}{}",
        block("MET", "0.523", &[0.1, 0.2]),
        block("VIOLATED", "-0.050", &[0.3])
    );
    let report = parse(&text);
    let (first, second) = (&report.paths[0], &report.paths[1]);

    for line in first.start_line..=first.end_line {
        assert_eq!(path_at_line(&text, line).unwrap().id, first.id);
    }
    let middle = (second.start_line + second.end_line) / 2;
    assert_eq!(path_at_line(&text, middle).unwrap().id, second.id);
    assert!(path_at_line(&text, second.end_line + 1).is_none());
}

#[test]
fn clock_listings_before_listing_header() {
    let text = "\
Slack (MET) :             0.800ns  (required time - arrival time)
  Source:                 top/reg_a/C
  Destination:            top/reg_b/D

                         (clock clk rise edge)        0.000     0.000 r
    BUFGCTRL_X0Y0        BUFG (Prop_bufg_I_O)         0.096     2.000 r  clk_BUFG_inst/O
                         net (fo=2, routed)           1.400     3.400    top/launch_clk
                         (clock clk rise edge)        2.000     2.000 r
    BUFGCTRL_X0Y0        BUFG (Prop_bufg_I_O)         0.096     4.000 r  clk_BUFG_inst/O
                         net (fo=2, routed)           1.300     5.300    top/capture_clk
    Location             Delay type                Incr(ns)  Path(ns)    Netlist Resource(s)
    SLICE_X0Y0           FDRE (Prop_fdre_C_Q)         0.456     3.856 r  top/reg_a/Q
                         net (fo=1, routed)           0.600     4.456    top/n_0
";
    let path = &parse(text).paths[0];

    let launch: Vec<&str> = path
        .source_clock_elements
        .as_ref()
        .unwrap()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(launch, vec!["clk_BUFG_inst/O", "top/launch_clk"]);

    let capture: Vec<&str> = path
        .dest_clock_elements
        .as_ref()
        .unwrap()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(capture, vec!["clk_BUFG_inst/O", "top/capture_clk"]);

    let data: Vec<&str> = path.path_elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(data, vec!["top/reg_a/Q", "top/n_0"]);
    assert_eq!(path.path_elements[0].kind, ElementKind::Logic);
}

#[test]
fn parsing_is_deterministic() {
    let text = format!(
        "{}\n{}",
        block("MET", "0.523", &[0.1, 0.2]),
        block("VIOLATED", "-0.050", &[0.3])
    );
    let first: TimingReport = parse(&text);
    let second = parse(&text);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn delay_is_sum_of_hops() {
    let report = parse(&block("MET", "1.000", &[0.5, 0.125, 0.25, 1.0]));
    let path = &report.paths[0];
    let sum: f64 = path.path_elements.iter().map(|e| e.delay).sum();
    assert_eq!(path.delay, sum);

    let empty = parse(&block("MET", "1.000", &[]));
    assert_eq!(empty.paths[0].delay, 0.0);
    assert!(empty.paths[0].path_elements.is_empty());
}

#[test]
fn slack_verdicts() {
    let zero_violated = parse(&block("VIOLATED", "0.000", &[0.1]));
    assert!(zero_violated.paths[0].failed);

    let negative_met = parse(&block("MET", "-0.010", &[0.1]));
    assert!(negative_met.paths[0].failed);

    let hold = parse(&block("hold path", "0.468", &[0.1]));
    assert!(!hold.paths[0].failed);
}

#[test]
fn line_ranges_do_not_overlap() {
    let text: String = (0..5)
        .map(|i| block(if i % 2 == 0 { "MET" } else { "VIOLATED" }, "0.1", &[0.1, 0.2]))
        .collect();
    let report = parse(&text);
    assert_eq!(report.paths.len(), 5);
    for pair in report.paths.windows(2) {
        assert!(pair[0].start_line <= pair[0].end_line);
        assert!(pair[0].end_line < pair[1].start_line);
    }
    assert_eq!(report.summary.failed_paths, 2);
}

#[test]
fn serialized_field_names() {
    let report = parse(&block("MET", "0.523", &[0.1]));
    let value = serde_json::to_value(&report).unwrap();
    let path = &value["paths"][0];
    assert_eq!(path["pathElements"][0]["type"], "logic");
    assert_eq!(path["startLine"], 0);
    assert_eq!(value["summary"]["totalPaths"], 1);
    assert!(path["sourceClockElements"].is_null());
}
