use std::any::type_name;

/// Last path segment of a type's name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let name = type_name::<T>();
    let name = name.split_once('<').map_or(name, |(head, _)| head);
    name.rsplit_once("::").map_or(name, |(_, tail)| tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Vec3;
    struct Pair<T>(T);

    #[test]
    fn strips_path_and_generics() {
        assert_eq!(short_type_name::<Vec3>(), "Vec3");
        assert_eq!(short_type_name::<Pair<Vec3>>(), "Pair");
        assert_eq!(short_type_name::<i32>(), "i32");
    }
}
