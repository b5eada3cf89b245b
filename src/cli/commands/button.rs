use crate::cli::parser::Commands;
use crate::core::thingy::ThingyButton;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Button { response } = cmd {
        let button: ThingyButton = response.parse()?;
        println!("{} {}", button.label(), button.css_class());
        // classes the host strips before applying the new one
        println!("remove: {}", ThingyButton::ALL_CLASSES.join(" "));
    }

    Ok(())
}
