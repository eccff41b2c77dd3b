// Example: routing a photo's combined classes and motion props to the frame and image layers.
use folio::partition::Keyframes;
use folio::{PhotoStyle, partition};

fn main() {
    let mut hover = Keyframes::new();
    hover.insert("marginTop".into(), "-0.5rem".into());
    hover.insert("scale".into(), "1.05".into());

    let style = PhotoStyle::new()
        .with_auto_classes("m-4 w-64 rounded-lg shadow-md hover:w-72 overflow-hidden")
        .with_image_classes("rounded-none")
        .with_auto_prop("whileHover", hover)
        .with_auto_prop("transition", "spring")
        .with_auto_prop("draggable", false);

    let p = partition(&style);
    println!("frame class=\"{}\"", p.frame.class_list());
    println!("image class=\"{}\"", p.image.class_list());
    println!("frame props={:?}", p.frame.props);
    println!("image props={:?}", p.image.props);
}
