use classifier::{circle_data_point_generator, dataset::RADIUS, ClassifierError};

#[test]
fn split_sizes_and_labels() {
    let gap = 0.1;
    let data = circle_data_point_generator(150, 50, gap, 2).unwrap();

    assert_eq!(data.train_x.len(), 150);
    assert_eq!(data.train_y.len(), 150);
    assert_eq!(data.test_x.len(), 50);
    assert_eq!(data.test_y.len(), 50);

    let all_x = data.train_x.iter().chain(&data.test_x);
    let all_y = data.train_y.iter().chain(&data.test_y);
    for (p, &y) in all_x.zip(all_y) {
        assert_eq!(p.len(), 2);
        assert!(p.iter().all(|v| (-1.0..=1.0).contains(v)));

        let r = p[0].hypot(p[1]);
        if y == 0.0 {
            assert!(r < RADIUS - gap / 2.0, "r = {}", r);
        } else {
            assert_eq!(y, 1.0);
            assert!(r > RADIUS + gap / 2.0, "r = {}", r);
        }
    }
}

#[test]
fn both_classes_present() {
    let data = circle_data_point_generator(200, 0, 0.01, 2).unwrap();
    let ones = data.train_y.iter().filter(|&&y| y == 1.0).count();

    assert!(ones > 0 && ones < 200, "ones = {}", ones);
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = circle_data_point_generator(30, 10, 0.01, 7).unwrap();
    let b = circle_data_point_generator(30, 10, 0.01, 7).unwrap();
    let c = circle_data_point_generator(30, 10, 0.01, 8).unwrap();

    assert_eq!(a.train_x, b.train_x);
    assert_eq!(a.test_y, b.test_y);
    assert_ne!(a.train_x, c.train_x);
}

#[test]
fn impossible_gap_is_rejected() {
    assert_eq!(
        circle_data_point_generator(10, 10, 1.5, 2).unwrap_err(),
        ClassifierError::InvalidGap(1.5)
    );
    assert!(circle_data_point_generator(10, 10, -0.1, 2).is_err());
}
