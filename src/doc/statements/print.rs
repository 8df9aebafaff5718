/*!
# `PRINT [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline (ASCII 10).
Separating items with a semicolon (;) prints one space between them.
Output is divided into zones of 8 characters. A comma will advance to the start of next zone.
A semicolon or comma at the end suppresses the newline.

## Example
```text
10 PRINT "A","B"
20 PRINT "A";"B";
30 PRINT 1/4
RUN
A       B
A B 0.25
```

*/
