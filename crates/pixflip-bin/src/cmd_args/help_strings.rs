/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static OPERATION_HELP: &str = "Apply a geometric operation to the image

Can be repeated, operations run in the order given on the command line.
When no operation is given the image is flipped vertically.

- flip-vertical: reflect rows around the horizontal midline
- flip-horizontal: reflect columns around the vertical midline
- mirror: flip both ways, rotating the image by 180 degrees";

pub static RESIZE_HELP: &str = "Resize the image by a factor

Factors of 0.10 and below, and factors strictly between 1.00 and 1.01 
are rejected. The factor is only validated, pixels are not resampled.";

pub static FORMAT_HELP: &str = "Force the output format

When absent the output extension decides, falling back to the format 
the input was decoded from. bmp images can be read but not written.";

pub static AFTER_HELP: &str = "Examples:
  pixflip -i ss.png                     flip ss.png vertically in place
  pixflip -i ss.png -o ss_1.png         write the flipped image to ss_1.png
  pixflip -i a.jpg --operation mirror --operation flip-horizontal -o b.png
  pixflip -i a.png --probe              print image metadata as json";
