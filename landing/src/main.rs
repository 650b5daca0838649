// CloudLift landing page - browser entry

fn main() {
    cloudlift_landing::mount();
}
