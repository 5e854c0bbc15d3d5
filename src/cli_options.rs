use std::collections::HashMap;
use std::path::PathBuf;

pub struct CliOptions {
    pub width: u32,
    pub height: u32,
    pub fov_degrees: f32,
    pub gamma: f32,
    pub scene_name: Option<String>,
    pub mesh_dir: Option<PathBuf>,
    pub output: PathBuf,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            fov_degrees: 90.0,
            gamma: 1.0,
            scene_name: None,
            mesh_dir: None,
            output: PathBuf::from("output.ppm"),
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --width <pixels> --height <pixels>
        --fov <degrees>
        --gamma <gamma>
        --scene_name cornell_box | empty
        --mesh_dir <dir with green_right, red_left, white_top, white_back, white_bottom>
        --output <file.ppm | file.png>
        --help
        "#
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", key))?;
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid value '{}' for {}", value, key))
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with("--") {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--width" => options.width = parse_value(&k, v)?,
            "--height" => options.height = parse_value(&k, v)?,
            "--fov" => options.fov_degrees = parse_value(&k, v)?,
            "--gamma" => options.gamma = parse_value(&k, v)?,
            "--scene_name" => options.scene_name = v,
            "--mesh_dir" => options.mesh_dir = v.map(PathBuf::from),
            "--output" => options.output = parse_value(&k, v)?,
            "--help" => options.show_help = true,
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    if options.width == 0 || options.height == 0 {
        return Err(format!(
            "Image must not be empty, got {}x{}",
            options.width, options.height
        ));
    }
    if options.gamma <= 0.0 || !options.gamma.is_finite() {
        return Err(format!("Gamma must be positive, got {}", options.gamma));
    }
    if !(options.fov_degrees > 0.0 && options.fov_degrees < 180.0) {
        return Err(format!(
            "Field of view must be within (0, 180) degrees, got {}",
            options.fov_degrees
        ));
    }
    Ok(options)
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("cornell-rt")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults() {
        let options = parse_args(args("")).unwrap();
        assert_eq!((options.width, options.height), (512, 512));
        assert_eq!(options.fov_degrees, 90.0);
        assert_eq!(options.gamma, 1.0);
        assert!(options.scene_name.is_none());
        assert_eq!(options.output, PathBuf::from("output.ppm"));
    }

    #[test]
    fn reads_every_key() {
        let options = parse_args(args(
            "--width 64 --height 32 --fov 60 --gamma 2.2 --scene_name empty \
             --mesh_dir models --output out.png --help",
        ))
        .unwrap();
        assert_eq!((options.width, options.height), (64, 32));
        assert_eq!(options.fov_degrees, 60.0);
        assert_eq!(options.gamma, 2.2);
        assert_eq!(options.scene_name.as_deref(), Some("empty"));
        assert_eq!(options.mesh_dir, Some(PathBuf::from("models")));
        assert_eq!(options.output, PathBuf::from("out.png"));
        assert!(options.show_help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args("--width")).is_err());
        assert!(parse_args(args("--width -3")).is_err());
        assert!(parse_args(args("--width 0")).is_err());
        assert!(parse_args(args("--gamma 0")).is_err());
        assert!(parse_args(args("--fov 180")).is_err());
        assert!(parse_args(args("--sample_count 4")).is_err());
        assert!(parse_args(args("stray")).is_err());
    }
}
