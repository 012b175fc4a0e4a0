use super::*;

#[test]
fn root_class_appends_config_class_and_exiting_modifier() {
    let config = CarouselConfig::default().with_class_name("tour--safety");
    assert_eq!(root_class(&config, false), "carousel tour--safety");
    assert_eq!(root_class(&config, true), "carousel tour--safety carousel--exiting");
}

#[test]
fn root_class_skips_empty_class_name() {
    let config = CarouselConfig::default().with_class_name("");
    assert_eq!(root_class(&config, false), "carousel");
    assert_eq!(root_class(&CarouselConfig::default(), false), "carousel");
}

#[test]
fn progress_style_is_a_clamped_percentage() {
    assert_eq!(progress_style(0.25), "width: 25.0%;");
    assert_eq!(progress_style(1.0), "width: 100.0%;");
    assert_eq!(progress_style(1.7), "width: 100.0%;");
}
